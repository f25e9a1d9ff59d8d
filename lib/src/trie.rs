use rand::Rng;

use crate::results::WordleError;

pub(crate) const ALPHABET_LENGTH: usize = 26;

const ROOT: usize = 0;

fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some(letter as usize - 'a' as usize)
    } else {
        None
    }
}

fn index_letter(index: usize) -> char {
    (b'a' + index as u8) as char
}

#[derive(Debug, Clone)]
struct Node {
    letter_index: usize,
    parent: usize,
    children: [Option<usize>; ALPHABET_LENGTH],
    is_word: bool,
}

impl Node {
    fn new(letter_index: usize, parent: usize) -> Node {
        Node {
            letter_index,
            parent,
            children: [None; ALPHABET_LENGTH],
            is_word: false,
        }
    }

    fn has_children(&self) -> bool {
        self.children.iter().any(|child| child.is_some())
    }
}

/// A 26-ary trie over lowercase ASCII words.
///
/// Nodes live in an arena and refer to each other by index, with each node
/// keeping its parent's index so that deletion can prune orphaned suffix
/// chains back toward the root. Children are enumerated in ascending letter
/// order, which makes every traversal deterministic for a given set of
/// stored words.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    free: Vec<usize>,
    num_words: usize,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Trie {
        Trie {
            nodes: vec![Node::new(0, ROOT)],
            free: Vec::new(),
            num_words: 0,
        }
    }

    /// Builds a trie containing every word in the given sequence.
    pub fn from_words<I, S>(words: I) -> Result<Trie, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref())?;
        }
        Ok(trie)
    }

    /// The number of distinct words stored.
    pub fn len(&self) -> usize {
        self.num_words
    }

    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    /// Inserts the given word, extending the path from the root letter by
    /// letter. Inserting a word that is already present is a no-op.
    pub fn insert(&mut self, word: &str) -> Result<(), WordleError> {
        let mut current = ROOT;
        for letter in word.chars() {
            let index = letter_index(letter).ok_or(WordleError::InvalidCharacter(letter))?;
            current = match self.nodes[current].children[index] {
                Some(child) => child,
                None => {
                    let child = self.allocate(index, current);
                    self.nodes[current].children[index] = Some(child);
                    child
                }
            };
        }
        if !self.nodes[current].is_word {
            self.nodes[current].is_word = true;
            self.num_words += 1;
        }
        Ok(())
    }

    /// Returns `true` iff the exact word is stored. Characters outside the
    /// alphabet simply fail the lookup rather than erroring.
    pub fn contains(&self, word: &str) -> bool {
        match self.walk(word) {
            Some(node) => self.nodes[node].is_word,
            None => false,
        }
    }

    /// Removes the given word if present.
    ///
    /// After clearing the terminal flag, walks parent links back toward the
    /// root and frees every node left with no terminal flag and no children,
    /// so a deleted word never leaves an orphaned suffix chain behind.
    pub fn delete(&mut self, word: &str) {
        let terminal = match self.walk(word) {
            Some(node) if self.nodes[node].is_word => node,
            _ => return,
        };
        self.nodes[terminal].is_word = false;
        self.num_words -= 1;

        let mut current = terminal;
        while current != ROOT {
            let node = &self.nodes[current];
            if node.is_word || node.has_children() {
                break;
            }
            let parent = node.parent;
            let index = node.letter_index;
            self.nodes[parent].children[index] = None;
            self.free.push(current);
            current = parent;
        }
    }

    /// Produces a word of the given length by descending from the root,
    /// picking uniformly among the live children at each depth.
    ///
    /// The distribution is uniform per branching choice, not over the stored
    /// words. Returns `None` if some path dead-ends before `length` letters,
    /// which for a dictionary of fixed-length words only happens when the
    /// trie is empty.
    pub fn random_word<R: Rng>(&self, length: usize, rng: &mut R) -> Option<String> {
        let mut current = ROOT;
        let mut word = String::with_capacity(length);
        for _ in 0..length {
            let children: Vec<usize> = self.nodes[current]
                .children
                .iter()
                .flatten()
                .copied()
                .collect();
            if children.is_empty() {
                return None;
            }
            current = children[rng.gen_range(0..children.len())];
            word.push(index_letter(self.nodes[current].letter_index));
        }
        Some(word)
    }

    /// Depth-first search for the first stored word of the given length that
    /// satisfies both predicates.
    ///
    /// `prefix_ok` is consulted on every accumulated prefix and prunes the
    /// branch when it returns `false`; `word_ok` is consulted only on
    /// complete words. Children are visited in ascending letter order and
    /// the first hit is returned immediately, so the result is reproducible
    /// for a given dictionary.
    pub fn first_match<P, W>(&self, length: usize, prefix_ok: P, word_ok: W) -> Option<String>
    where
        P: Fn(&str) -> bool,
        W: Fn(&str) -> bool,
    {
        let mut prefix = String::with_capacity(length);
        self.first_match_below(ROOT, length, &mut prefix, &prefix_ok, &word_ok)
    }

    fn first_match_below<P, W>(
        &self,
        node: usize,
        length: usize,
        prefix: &mut String,
        prefix_ok: &P,
        word_ok: &W,
    ) -> Option<String>
    where
        P: Fn(&str) -> bool,
        W: Fn(&str) -> bool,
    {
        for index in 0..ALPHABET_LENGTH {
            let child = match self.nodes[node].children[index] {
                Some(child) => child,
                None => continue,
            };
            prefix.push(index_letter(index));
            if prefix_ok(prefix) {
                if prefix.len() == length {
                    if self.nodes[child].is_word && word_ok(prefix) {
                        return Some(prefix.clone());
                    }
                } else if let Some(word) =
                    self.first_match_below(child, length, prefix, prefix_ok, word_ok)
                {
                    return Some(word);
                }
            }
            prefix.pop();
        }
        None
    }

    fn walk(&self, word: &str) -> Option<usize> {
        let mut current = ROOT;
        for letter in word.chars() {
            let index = letter_index(letter)?;
            current = self.nodes[current].children[index]?;
        }
        Some(current)
    }

    fn allocate(&mut self, letter_index: usize, parent: usize) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Node::new(letter_index, parent);
                index
            }
            None => {
                self.nodes.push(Node::new(letter_index, parent));
                self.nodes.len() - 1
            }
        }
    }
}

impl Default for Trie {
    fn default() -> Trie {
        Trie::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::assert_matches;
    use rand::rngs::mock::StepRng;

    fn test_trie() -> Trie {
        Trie::from_words(["hello", "help", "world"]).unwrap()
    }

    #[test]
    fn contains_empty() {
        let trie = Trie::new();

        assert!(!trie.contains("hello"));
        assert_eq!(trie.len(), 0);
    }

    #[test]
    fn insert_and_contains() {
        let trie = test_trie();

        assert!(trie.contains("hello"));
        assert!(trie.contains("help"));
        assert!(trie.contains("world"));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn contains_rejects_prefixes_and_extensions() {
        let trie = test_trie();

        assert!(!trie.contains("hel"));
        assert!(!trie.contains("hellos"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn contains_fails_closed_on_bad_characters() {
        let trie = test_trie();

        assert!(!trie.contains("hell0"));
        assert!(!trie.contains("HELLO"));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = test_trie();

        trie.insert("hello").unwrap();
        trie.insert("hello").unwrap();

        assert_eq!(trie.len(), 3);
        assert!(trie.contains("hello"));
    }

    #[test]
    fn insert_rejects_bad_characters() {
        let mut trie = Trie::new();

        assert_matches!(trie.insert("hell0"), Err(WordleError::InvalidCharacter('0')));
    }

    #[test]
    fn delete_missing_word_is_a_noop() {
        let mut trie = test_trie();

        trie.delete("other");
        trie.delete("hel");

        assert_eq!(trie.len(), 3);
        assert!(trie.contains("hello"));
    }

    #[test]
    fn delete_keeps_shared_prefix() {
        let mut trie = test_trie();

        trie.delete("hello");

        assert!(!trie.contains("hello"));
        assert!(trie.contains("help"));
        assert!(trie.contains("world"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn delete_prunes_unshared_chain() {
        let mut trie = test_trie();

        trie.delete("world");

        assert!(!trie.contains("world"));
        // The whole 'w' branch is gone, so its slots are free for reuse.
        assert_eq!(trie.free.len(), 5);
        assert!(trie.contains("hello"));
    }

    #[test]
    fn delete_stops_at_terminal_ancestor() {
        let mut trie = Trie::from_words(["hat", "hatch"]).unwrap();

        trie.delete("hatch");

        assert!(!trie.contains("hatch"));
        assert!(trie.contains("hat"));
        assert_eq!(trie.free.len(), 2);
    }

    #[test]
    fn delete_then_reinsert() {
        let mut trie = test_trie();

        trie.delete("world");
        trie.insert("world").unwrap();

        assert!(trie.contains("world"));
        assert_eq!(trie.len(), 3);
        assert!(trie.free.is_empty());
    }

    #[test]
    fn random_word_returns_stored_word() {
        let trie = Trie::from_words(["earth", "eager", "taste"]).unwrap();
        let mut rng = StepRng::new(0, 7);

        for _ in 0..20 {
            let word = trie.random_word(5, &mut rng).unwrap();
            assert!(trie.contains(&word));
        }
    }

    #[test]
    fn random_word_empty_trie() {
        let trie = Trie::new();
        let mut rng = StepRng::new(0, 1);

        assert_eq!(trie.random_word(5, &mut rng), None);
    }

    #[test]
    fn first_match_is_alphabetical() {
        let trie = Trie::from_words(["world", "hello", "help"]).unwrap();

        let word = trie.first_match(5, |_| true, |_| true);

        assert_eq!(word.as_deref(), Some("hello"));
    }

    #[test]
    fn first_match_prunes_by_prefix() {
        let trie = Trie::from_words(["hello", "world"]).unwrap();

        let word = trie.first_match(5, |prefix| !prefix.starts_with('h'), |_| true);

        assert_eq!(word.as_deref(), Some("world"));
    }

    #[test]
    fn first_match_applies_word_check_on_complete_words_only() {
        let trie = Trie::from_words(["hello", "world"]).unwrap();

        let word = trie.first_match(5, |_| true, |word| word.contains('r'));

        assert_eq!(word.as_deref(), Some("world"));
    }

    #[test]
    fn first_match_exhausted() {
        let trie = Trie::from_words(["hello", "world"]).unwrap();

        assert_eq!(trie.first_match(5, |_| true, |_| false), None);
        assert_eq!(trie.first_match(4, |_| true, |_| true), None);
    }
}
