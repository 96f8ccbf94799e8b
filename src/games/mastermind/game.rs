use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::game::ParlorGame;

/// Codes are always four digits; shorter or longer guesses earn no score
pub const CODE_LEN: usize = 4;

/// Peg feedback for one scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Right digit in the right position ("black pegs")
    pub exact: usize,
    /// Right digit in the wrong position ("white pegs")
    pub color: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MastermindError {
    #[error("a guess must be exactly {CODE_LEN} digits, each 0-9")]
    InvalidGuess,

    #[error("the code is already broken")]
    AlreadySolved,
}

/// Four independent uniform draws from 0-9; digits may repeat
pub fn generate_secret_code() -> [u8; CODE_LEN] {
    let mut rng = rand::rng();
    std::array::from_fn(|_| rng.random_range(0..10u8))
}

/// Shape-check a raw guess: exactly four ASCII digits. Anything else is a
/// recoverable invalid-input condition and the driver re-prompts.
pub fn validate_guess(input: &str) -> Result<[u8; CODE_LEN], MastermindError> {
    let input = input.trim();
    if input.len() != CODE_LEN || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MastermindError::InvalidGuess);
    }

    let mut digits = [0u8; CODE_LEN];
    for (slot, byte) in digits.iter_mut().zip(input.bytes()) {
        *slot = byte - b'0';
    }
    Ok(digits)
}

/// Standard black/white peg rule. Exact counts positionwise equality; color
/// is the multiset overlap of digit values minus the exact matches, so no
/// digit is counted in both buckets.
pub fn score_guess(secret: &[u8; CODE_LEN], guess: &[u8; CODE_LEN]) -> Feedback {
    let exact = secret
        .iter()
        .zip(guess.iter())
        .filter(|(s, g)| s == g)
        .count();

    let mut in_secret = [0usize; 10];
    let mut in_guess = [0usize; 10];
    for &digit in secret {
        in_secret[digit as usize] += 1;
    }
    for &digit in guess {
        in_guess[digit as usize] += 1;
    }
    let overlap: usize = (0..10).map(|d| in_secret[d].min(in_guess[d])).sum();

    Feedback {
        exact,
        color: overlap - exact,
    }
}

/// One code-breaking session: an immutable secret, the number of guesses
/// scored so far, and whether the code has been broken. Guesses themselves
/// are never stored past the round they score in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MastermindState {
    secret: [u8; CODE_LEN],
    guesses: u32,
    solved: bool,
    last_feedback: Option<Feedback>,
}

impl MastermindState {
    pub fn new() -> Self {
        Self::with_secret(generate_secret_code())
    }

    /// Fixed-secret constructor for tests and rigged demos
    pub fn with_secret(secret: [u8; CODE_LEN]) -> Self {
        Self {
            secret,
            guesses: 0,
            solved: false,
            last_feedback: None,
        }
    }

    /// Guesses scored so far; the driver reports this when the code breaks
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn last_feedback(&self) -> Option<Feedback> {
        self.last_feedback
    }

    /// Score one guess against the secret. The session ends the moment the
    /// guess equals the secret digit for digit; after that, further guesses
    /// are refused until [`Self::reset`].
    pub fn submit_guess(&mut self, guess: [u8; CODE_LEN]) -> Result<Feedback, MastermindError> {
        if self.solved {
            return Err(MastermindError::AlreadySolved);
        }

        let feedback = score_guess(&self.secret, &guess);
        self.guesses += 1;
        self.last_feedback = Some(feedback);
        if feedback.exact == CODE_LEN {
            self.solved = true;
        }

        debug!(
            guesses = self.guesses,
            exact = feedback.exact,
            color = feedback.color,
            solved = self.solved,
            "guess scored"
        );
        Ok(feedback)
    }

    /// New secret, zeroed counters
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for MastermindState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure code-breaking engine - prompting and peg display live in the driver
#[derive(Clone)]
pub struct MastermindGame;

impl ParlorGame for MastermindGame {
    type State = MastermindState;
    type Input = [u8; CODE_LEN];
    type Error = MastermindError;

    const ID: &'static str = "mastermind";
    const NAME: &'static str = "Mastermind";
    const DESCRIPTION: &'static str = "Break the hidden 4-digit code from peg feedback";
    const MIN_PLAYERS: usize = 1;
    const MAX_PLAYERS: usize = 1;

    fn new_game() -> Self::State {
        MastermindState::new()
    }

    fn apply(state: &mut Self::State, input: &Self::Input) -> Result<String, MastermindError> {
        let feedback = state.submit_guess(*input)?;
        if state.is_solved() {
            Ok(format!(
                "Congratulations! You've guessed the code. It took you {} guesses.",
                state.guesses()
            ))
        } else {
            Ok(format!(
                "Correct in position: {}. Incorrect but present: {}.",
                feedback.exact, feedback.color
            ))
        }
    }

    fn is_finished(state: &Self::State) -> bool {
        state.is_solved()
    }

    fn reset(state: &mut Self::State) {
        state.reset();
    }
}
