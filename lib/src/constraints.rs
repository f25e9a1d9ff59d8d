use std::collections::{HashMap, HashSet};

/// What is known about a single letter of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterKnowledge {
    /// The letter has never produced any evidence.
    Unknown,
    /// The letter is known not to occur in the solution.
    Absent,
    /// The letter is known to occur somewhere in the solution.
    Present,
}

/// Knowledge accumulated from every guess scored so far in one game.
///
/// Evidence is append-only: position assignments are never unset, vetoed
/// letters are never removed, and a letter once known present is never
/// downgraded to absent. There is exactly one store per game, owned by the
/// game itself.
#[derive(Debug, Clone)]
pub struct ConstraintStore {
    word_length: usize,
    /// Letters pinned to a position by an exact-match score.
    assign: Vec<Option<char>>,
    /// Letters excluded from a position by a present-elsewhere score there.
    veto: Vec<HashSet<char>>,
    /// Per-letter presence knowledge; `true` means occurs somewhere.
    include: HashMap<char, bool>,
}

impl ConstraintStore {
    /// Creates an empty store for words of the given length.
    pub fn new(word_length: usize) -> ConstraintStore {
        ConstraintStore {
            word_length,
            assign: vec![None; word_length],
            veto: vec![HashSet::new(); word_length],
            include: HashMap::new(),
        }
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Records that `letter` occupies `position` in the solution.
    pub(crate) fn record_exact(&mut self, position: usize, letter: char) {
        self.assign[position] = Some(letter);
        self.include.insert(letter, true);
    }

    /// Records that `letter` occurs in the solution but not at `position`.
    pub(crate) fn record_present(&mut self, position: usize, letter: char) {
        self.veto[position].insert(letter);
        self.include.insert(letter, true);
    }

    /// Records that `letter` scored absent. A letter already known present
    /// stays present; inclusive evidence always wins.
    pub(crate) fn record_absent(&mut self, letter: char) {
        self.include.entry(letter).or_insert(false);
    }

    /// The letter pinned to the given position, if any.
    pub fn assigned(&self, position: usize) -> Option<char> {
        self.assign[position]
    }

    /// The letters known not to occupy the given position.
    pub fn vetoed(&self, position: usize) -> &HashSet<char> {
        &self.veto[position]
    }

    /// What is known about the given letter, for rendering an alphabet key.
    pub fn knowledge(&self, letter: char) -> LetterKnowledge {
        match self.include.get(&letter) {
            Some(true) => LetterKnowledge::Present,
            Some(false) => LetterKnowledge::Absent,
            None => LetterKnowledge::Unknown,
        }
    }

    /// Checks a (possibly partial) candidate against the positional and
    /// per-letter evidence.
    ///
    /// Returns `false` at the first position where an assigned letter
    /// differs, the letter is known absent, or the letter is vetoed at that
    /// position. Passing this check is necessary but not sufficient for a
    /// complete word; see [`ConstraintStore::allows_word`].
    pub fn allows_prefix(&self, prefix: &str) -> bool {
        for (position, letter) in prefix.chars().enumerate() {
            if let Some(assigned) = self.assign[position] {
                if assigned != letter {
                    return false;
                }
            }
            if self.include.get(&letter) == Some(&false) {
                return false;
            }
            if self.veto[position].contains(&letter) {
                return false;
            }
        }
        true
    }

    /// Checks a complete candidate word: it must pass
    /// [`ConstraintStore::allows_prefix`] and additionally contain every
    /// letter known to occur in the solution.
    pub fn allows_word(&self, word: &str) -> bool {
        self.allows_prefix(word)
            && self
                .include
                .iter()
                .filter(|(_, present)| **present)
                .all(|(letter, _)| word.contains(*letter))
    }
}
