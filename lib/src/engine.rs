use crate::constraints::ConstraintStore;
use crate::data::WordList;
use crate::results::{GameStatus, GuessRecord, LetterFeedback, ScoredLetter, WordleError};
use crate::trie::Trie;

pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Determines the per-letter feedback for `guess` against `solution`.
///
/// A letter scores exact when it matches the solution at the same position,
/// and present-elsewhere when it occurs anywhere else in the solution. With
/// repeated letters this can credit more occurrences of a guessed letter
/// than the solution actually holds; that membership rule is the scoring
/// contract of this crate, not two-pass duplicate reconciliation.
///
/// Panics if `solution` and `guess` have different lengths.
pub fn score_guess(solution: &str, guess: &str) -> GuessRecord {
    if solution.len() != guess.len() {
        panic!(
            "solution ({}) must have the same length as the guess ({})",
            solution, guess
        );
    }
    let solution_bytes = solution.as_bytes();
    GuessRecord::new(
        guess
            .char_indices()
            .map(|(index, letter)| {
                let feedback = if solution_bytes[index] == letter as u8 {
                    LetterFeedback::Exact
                } else if solution.contains(letter) {
                    LetterFeedback::PresentElsewhere
                } else {
                    LetterFeedback::Absent
                };
                ScoredLetter::new(letter, feedback)
            })
            .collect(),
    )
}

/// A single game: the secret solution, the board of scored guesses, the
/// accumulated constraints, and the two dictionaries guesses are checked
/// against.
///
/// The only mutating operation is [`Game::submit_guess`]; once the status
/// leaves [`GameStatus::Ongoing`] the game is permanently read-only.
#[derive(Debug)]
pub struct Game {
    word_length: usize,
    max_attempts: usize,
    solution: String,
    attempt: usize,
    status: GameStatus,
    board: Vec<GuessRecord>,
    constraints: ConstraintStore,
    solutions: Trie,
    guesses: Trie,
}

impl Game {
    /// Starts a game with a solution sampled at random from `solutions`.
    ///
    /// `guesses` is the full set of acceptable submissions and must contain
    /// every word in `solutions`; both lists must share one word length.
    /// Violations fail with [`WordleError::DataLoad`] and no game is
    /// created.
    pub fn new(
        solutions: &WordList,
        guesses: &WordList,
        max_attempts: usize,
    ) -> Result<Game, WordleError> {
        let solutions_trie = solutions.to_trie()?;
        let solution = solutions_trie
            .random_word(solutions.word_length(), &mut rand::thread_rng())
            .ok_or_else(|| WordleError::DataLoad(String::from("solutions list is empty")))?;
        Game::build(solution, solutions_trie, solutions, guesses, max_attempts)
    }

    /// Starts a game with a fixed solution, which must be present in
    /// `solutions`. Useful for replays and deterministic tests.
    pub fn with_solution(
        solution: &str,
        solutions: &WordList,
        guesses: &WordList,
        max_attempts: usize,
    ) -> Result<Game, WordleError> {
        let solutions_trie = solutions.to_trie()?;
        if !solutions_trie.contains(solution) {
            return Err(WordleError::DataLoad(format!(
                "solution '{}' is not in the solutions list",
                solution
            )));
        }
        Game::build(
            solution.to_string(),
            solutions_trie,
            solutions,
            guesses,
            max_attempts,
        )
    }

    fn build(
        solution: String,
        solutions_trie: Trie,
        solutions: &WordList,
        guesses: &WordList,
        max_attempts: usize,
    ) -> Result<Game, WordleError> {
        let word_length = solutions.word_length();
        if guesses.word_length() != word_length {
            return Err(WordleError::DataLoad(format!(
                "solutions are {} letters but guesses are {}",
                word_length,
                guesses.word_length()
            )));
        }
        let guesses_trie = guesses.to_trie()?;
        if let Some(missing) = solutions
            .words()
            .iter()
            .find(|word| !guesses_trie.contains(word))
        {
            return Err(WordleError::DataLoad(format!(
                "guesses list must contain every solution, but is missing '{}'",
                missing
            )));
        }
        Ok(Game {
            word_length,
            max_attempts,
            solution,
            attempt: 0,
            status: GameStatus::Ongoing,
            board: Vec::with_capacity(max_attempts),
            constraints: ConstraintStore::new(word_length),
            solutions: solutions_trie,
            guesses: guesses_trie,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The number of guesses accepted so far.
    pub fn attempt(&self) -> usize {
        self.attempt
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// The scored guesses, oldest first.
    pub fn board(&self) -> &[GuessRecord] {
        &self.board
    }

    /// The accumulated constraints, for presentation layers that render
    /// known-letter coloring.
    pub fn constraints(&self) -> &ConstraintStore {
        &self.constraints
    }

    /// The secret word. Intended for display once the game is over.
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Scores the given word against the solution and applies the evidence.
    ///
    /// Fails without touching any state if the game is over, the word has
    /// the wrong length or an unsupported character, or the word is not in
    /// the acceptable-guesses dictionary; the caller may correct the input
    /// and retry.
    pub fn submit_guess(&mut self, word: &str) -> Result<GuessRecord, WordleError> {
        if self.status != GameStatus::Ongoing {
            return Err(WordleError::GameOver);
        }
        let length = word.chars().count();
        if length != self.word_length {
            return Err(WordleError::InvalidLength {
                expected: self.word_length,
                actual: length,
            });
        }
        if let Some(letter) = word.chars().find(|letter| !letter.is_ascii_lowercase()) {
            return Err(WordleError::InvalidCharacter(letter));
        }
        if !self.guesses.contains(word) {
            return Err(WordleError::UnknownWord);
        }

        let record = score_guess(&self.solution, word);
        // Inclusive evidence is applied before exclusive evidence so a
        // letter scoring both exact and absent in one guess stays included.
        for (position, scored) in record.letters().iter().enumerate() {
            match scored.feedback {
                LetterFeedback::Exact => self.constraints.record_exact(position, scored.letter),
                LetterFeedback::PresentElsewhere => {
                    self.constraints.record_present(position, scored.letter)
                }
                _ => {}
            }
        }
        for scored in record.letters() {
            if scored.feedback == LetterFeedback::Absent {
                self.constraints.record_absent(scored.letter);
            }
        }

        self.board.push(record.clone());
        self.attempt += 1;
        if record.is_winning() {
            self.status = GameStatus::Won;
        } else if self.attempt == self.max_attempts {
            self.status = GameStatus::Lost;
        }
        Ok(record)
    }

    /// Checks a partial candidate against the accumulated constraints.
    pub fn validate(&self, prefix: &str) -> bool {
        self.constraints.allows_prefix(prefix)
    }

    /// Checks a complete candidate word against the accumulated
    /// constraints, including that every known-present letter appears.
    pub fn validate_full(&self, word: &str) -> bool {
        self.constraints.allows_word(word)
    }

    /// Proposes a legal next guess consistent with everything learned so
    /// far.
    ///
    /// Before any guess has been scored this is a random word from the
    /// solutions dictionary. Afterwards it is a depth-first backtracking
    /// search of the solutions trie, pruned position by position by the
    /// constraints, returning the first fully consistent word in the trie's
    /// deterministic child order. Returns `None` when no stored solution
    /// satisfies the constraints.
    pub fn suggest(&self) -> Option<String> {
        if self.attempt == 0 {
            return self
                .solutions
                .random_word(self.word_length, &mut rand::thread_rng());
        }
        self.solutions.first_match(
            self.word_length,
            |prefix| self.constraints.allows_prefix(prefix),
            |word| self.constraints.allows_word(word),
        )
    }
}
