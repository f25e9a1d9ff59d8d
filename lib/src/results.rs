use std::error::Error;
use std::fmt;

/// The outcome of scoring a single letter of a guess against the solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterFeedback {
    /// No evidence yet, e.g. an unfilled board slot.
    Unknown,
    /// The letter does not occur in the solution.
    Absent,
    /// The letter occurs in the solution, but not at this position.
    PresentElsewhere,
    /// The letter occupies exactly this position in the solution.
    Exact,
}

/// A single letter of a guess together with its feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredLetter {
    pub letter: char,
    pub feedback: LetterFeedback,
}

impl ScoredLetter {
    pub fn new(letter: char, feedback: LetterFeedback) -> ScoredLetter {
        ScoredLetter { letter, feedback }
    }
}

/// One accepted guess with per-letter feedback. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    letters: Vec<ScoredLetter>,
}

impl GuessRecord {
    pub(crate) fn new(letters: Vec<ScoredLetter>) -> GuessRecord {
        GuessRecord { letters }
    }

    /// The scored letters, in guess order.
    pub fn letters(&self) -> &[ScoredLetter] {
        &self.letters
    }

    /// The guessed word, reassembled from the scored letters.
    pub fn word(&self) -> String {
        self.letters.iter().map(|sl| sl.letter).collect()
    }

    /// Returns `true` iff every letter scored [`LetterFeedback::Exact`].
    pub fn is_winning(&self) -> bool {
        self.letters
            .iter()
            .all(|sl| sl.feedback == LetterFeedback::Exact)
    }
}

impl fmt::Display for GuessRecord {
    /// Renders each letter followed by a feedback marker: `=` for exact,
    /// `~` for present-elsewhere, `.` for absent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sl in &self.letters {
            let marker = match sl.feedback {
                LetterFeedback::Exact => '=',
                LetterFeedback::PresentElsewhere => '~',
                LetterFeedback::Absent => '.',
                LetterFeedback::Unknown => '?',
            };
            write!(f, "{}{}", sl.letter, marker)?;
        }
        Ok(())
    }
}

/// Whether the game is still in progress, or how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won,
    Lost,
}

/// Indicates that an error occurred while loading a dictionary or playing
/// a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordleError {
    /// The submitted word did not have the configured length.
    InvalidLength { expected: usize, actual: usize },
    /// The submitted word contained a character outside `a..=z`.
    InvalidCharacter(char),
    /// The submitted word is not in the acceptable-guesses dictionary.
    UnknownWord,
    /// The game has already been won or lost.
    GameOver,
    /// A word list could not be read, or produced an empty or inconsistent
    /// dictionary.
    DataLoad(String),
}

impl fmt::Display for WordleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordleError::InvalidLength { expected, actual } => {
                write!(f, "word must be {} letters, got {}", expected, actual)
            }
            WordleError::InvalidCharacter(letter) => {
                write!(f, "unsupported character '{}'", letter)
            }
            WordleError::UnknownWord => write!(f, "word is not in the dictionary"),
            WordleError::GameOver => write!(f, "the game is already over"),
            WordleError::DataLoad(message) => write!(f, "failed to load word list: {}", message),
        }
    }
}

impl Error for WordleError {}
