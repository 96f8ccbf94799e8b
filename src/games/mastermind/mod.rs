/// Mastermind rules engine - secret generation, guess validation, peg scoring
pub mod game;

pub use game::{
    generate_secret_code, score_guess, validate_guess, Feedback, MastermindError, MastermindGame,
    MastermindState, CODE_LEN,
};
