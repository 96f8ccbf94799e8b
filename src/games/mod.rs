pub mod macros;

pub mod hangman;
pub mod mastermind;
pub mod rps;
pub mod tictactoe;

use crate::register_games;

/// Metadata about a game
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub min_players: usize,
    pub max_players: usize,
}

// Register all games here - a hub entry is the only wiring a new game needs
register_games! {
    tictactoe => TicTacToeGame,
    mastermind => MastermindGame,
    hangman => HangmanGame,
    rps => RpsGame,
}
