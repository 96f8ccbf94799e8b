pub mod core {
    pub mod game;
}

pub mod games;

// Re-export for convenience
pub use crate::core::game::ParlorGame;
pub use crate::games::{all_games, find_game, GameInfo};
