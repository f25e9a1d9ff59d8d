use std::io::BufRead;

use crate::results::WordleError;
use crate::trie::Trie;

/// A validated list of fixed-length lowercase words, ready to be loaded
/// into a [`Trie`].
///
/// Malformed entries are a loading-time error: a game is never constructed
/// on top of a partially valid dictionary.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    word_length: usize,
}

impl WordList {
    /// Reads words from the given reader, one word per line.
    ///
    /// Each word is converted to lower case; blank lines are skipped. Fails
    /// with [`WordleError::DataLoad`] if the reader errors, any entry has
    /// the wrong length or a character outside `a..=z`, or no words remain.
    pub fn from_reader<R: BufRead>(reader: R, word_length: usize) -> Result<WordList, WordleError> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|err| WordleError::DataLoad(err.to_string()))?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            words.push(validate_word(word, word_length)?);
        }
        WordList::from_validated(words, word_length)
    }

    /// Builds a list from an in-memory sequence of words, applying the same
    /// validation as [`WordList::from_reader`].
    pub fn from_words<I, S>(words: I, word_length: usize) -> Result<WordList, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| validate_word(word.as_ref(), word_length))
            .collect::<Result<Vec<String>, WordleError>>()?;
        WordList::from_validated(words, word_length)
    }

    fn from_validated(words: Vec<String>, word_length: usize) -> Result<WordList, WordleError> {
        if words.is_empty() {
            return Err(WordleError::DataLoad(String::from("word list is empty")));
        }
        Ok(WordList { words, word_length })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Loads every word into a fresh trie.
    pub fn to_trie(&self) -> Result<Trie, WordleError> {
        Trie::from_words(&self.words)
    }
}

fn validate_word(word: &str, word_length: usize) -> Result<String, WordleError> {
    let word = word.to_lowercase();
    if word.chars().count() != word_length {
        return Err(WordleError::DataLoad(format!(
            "'{}' is not {} letters long",
            word, word_length
        )));
    }
    if let Some(letter) = word.chars().find(|letter| !letter.is_ascii_lowercase()) {
        return Err(WordleError::DataLoad(format!(
            "'{}' contains unsupported character '{}'",
            word, letter
        )));
    }
    Ok(word)
}
