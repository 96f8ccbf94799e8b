/// Rock-paper-scissors judge - single round outcome determination
pub mod game;

pub use game::{determine_winner, Choice, Outcome, Round, RpsError, RpsGame, RpsState};
