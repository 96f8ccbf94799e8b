use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::game::ParlorGame;
use crate::games::hangman::words::{random_word, WORDS};

/// Six misses lose the round, one per escalating gallows stage
pub const MAX_MISSES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HangmanError {
    #[error("guess a single letter a-z, not '{0}'")]
    InvalidLetter(char),

    #[error("letter '{0}' was already guessed")]
    AlreadyGuessed(char),

    #[error("the round is over; reset to play again")]
    GameOver,
}

/// One round of hangman: an immutable secret word and two disjoint,
/// monotonically growing letter sets. The sets and the secret length are
/// all a driver needs to draw the masked word and the gallows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HangmanState {
    secret: String,
    missed: BTreeSet<char>,
    correct: BTreeSet<char>,
    phase: Phase,
}

impl HangmanState {
    /// Fresh round with a word drawn from the default dictionary
    pub fn new() -> Self {
        Self::with_word(random_word(WORDS))
    }

    /// Fresh round drawing from a caller-supplied word list
    pub fn from_words(words: &[&str]) -> Self {
        Self::with_word(random_word(words))
    }

    /// Fixed-word constructor for tests and rigged demos. The word is
    /// normalized to lowercase; it must be plain a-z.
    pub fn with_word(word: &str) -> Self {
        let secret = word.to_ascii_lowercase();
        debug_assert!(
            !secret.is_empty() && secret.bytes().all(|b| b.is_ascii_lowercase()),
            "secret words must be plain a-z"
        );

        Self {
            secret,
            missed: BTreeSet::new(),
            correct: BTreeSet::new(),
            phase: Phase::InProgress,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Length of the secret word; drivers draw this many blanks
    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }

    pub fn missed(&self) -> &BTreeSet<char> {
        &self.missed
    }

    pub fn correct(&self) -> &BTreeSet<char> {
        &self.correct
    }

    pub fn misses_left(&self) -> usize {
        MAX_MISSES - self.missed.len()
    }

    /// The word as the player currently sees it, unguessed letters masked
    pub fn masked_word(&self) -> String {
        self.secret
            .chars()
            .map(|c| if self.correct.contains(&c) { c } else { '_' })
            .collect()
    }

    /// The secret itself, revealed only once the round is over
    pub fn reveal(&self) -> Option<&str> {
        match self.phase {
            Phase::InProgress => None,
            Phase::Won | Phase::Lost => Some(&self.secret),
        }
    }

    /// Record one letter guess. Returns whether the letter is in the word.
    /// Repeats and non-letters are rejected without touching any state, and
    /// a finished round refuses guesses until [`Self::reset`].
    pub fn guess_letter(&mut self, letter: char) -> Result<bool, HangmanError> {
        if self.phase != Phase::InProgress {
            return Err(HangmanError::GameOver);
        }

        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Err(HangmanError::InvalidLetter(letter));
        }
        if self.missed.contains(&letter) || self.correct.contains(&letter) {
            return Err(HangmanError::AlreadyGuessed(letter));
        }

        let hit = self.secret.contains(letter);
        if hit {
            self.correct.insert(letter);
            let all_found = self.secret.chars().all(|c| self.correct.contains(&c));
            if all_found {
                self.phase = Phase::Won;
            }
        } else {
            self.missed.insert(letter);
            if self.missed.len() >= MAX_MISSES {
                self.phase = Phase::Lost;
            }
        }

        debug!(letter = %letter, hit, phase = ?self.phase, "letter guessed");
        Ok(hit)
    }

    /// New word from the default dictionary, cleared guess sets
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for HangmanState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure word-guessing engine - gallows art and prompts live in the driver
#[derive(Clone)]
pub struct HangmanGame;

impl ParlorGame for HangmanGame {
    type State = HangmanState;
    type Input = char;
    type Error = HangmanError;

    const ID: &'static str = "hangman";
    const NAME: &'static str = "Hangman";
    const DESCRIPTION: &'static str = "Guess the secret word one letter at a time";
    const MIN_PLAYERS: usize = 1;
    const MAX_PLAYERS: usize = 1;

    fn new_game() -> Self::State {
        HangmanState::new()
    }

    fn apply(state: &mut Self::State, input: &char) -> Result<String, HangmanError> {
        let hit = state.guess_letter(*input)?;
        match state.phase() {
            Phase::Won => Ok(format!(
                "Yes! The secret word is \"{}\"! You have won!",
                state.masked_word()
            )),
            Phase::Lost => Ok(format!(
                "You have run out of guesses! After {} missed guesses and {} correct guesses, the word was \"{}\".",
                state.missed().len(),
                state.correct().len(),
                state.reveal().unwrap_or_default()
            )),
            Phase::InProgress if hit => Ok(format!(
                "Good guess! '{}' is in the word.",
                input.to_ascii_lowercase()
            )),
            Phase::InProgress => Ok(format!(
                "Sorry, '{}' is not in the word.",
                input.to_ascii_lowercase()
            )),
        }
    }

    fn is_finished(state: &Self::State) -> bool {
        state.phase() != Phase::InProgress
    }

    fn reset(state: &mut Self::State) {
        state.reset();
    }
}
