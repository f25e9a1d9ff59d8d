mod constraints;
mod data;
mod engine;
mod results;
mod trie;

pub use constraints::{ConstraintStore, LetterKnowledge};
pub use data::WordList;
pub use engine::{score_guess, Game, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH};
pub use results::*;
pub use trie::Trie;
