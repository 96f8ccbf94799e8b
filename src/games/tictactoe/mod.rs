/// Tic-tac-toe rules engine - board, move legality, win and draw detection
pub mod game;

pub use game::{
    default_players, Coord, Move, Player, TicTacToeError, TicTacToeGame, TicTacToeState,
    BOARD_SIZE,
};
