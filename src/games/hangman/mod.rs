/// Hangman rules engine - word state, guess tracking, win/loss detection
pub mod game;
pub mod words;

pub use game::{HangmanError, HangmanGame, HangmanState, Phase, MAX_MISSES};
pub use words::{random_word, WORDS};
