/// Core game interface for the parlor hub
use serde::{Deserialize, Serialize};

/// Main trait that every bundled game must implement
/// This provides a standard interface between a rule engine and whatever
/// front end drives it (console prompt loop, desktop window, test harness)
pub trait ParlorGame {
    /// Game state snapshot handed to drivers; the engine stays the sole mutator
    type State: Serialize + for<'de> Deserialize<'de> + Clone + Send + Sync + 'static;

    /// The one normalized input shape the engine accepts per turn
    type Input: Clone + Send + Sync + 'static;

    /// Recoverable rejection: malformed input, an illegal move, or a move
    /// submitted after the game already ended
    type Error: std::error::Error;

    const ID: &'static str;
    const NAME: &'static str;
    const DESCRIPTION: &'static str;
    const MIN_PLAYERS: usize;
    const MAX_PLAYERS: usize;

    /// Initialize a fresh game; secrets and other random draws happen here
    fn new_game() -> Self::State;

    /// Advance the game by one input. `Ok` carries the round result line a
    /// driver may display verbatim; on `Err` nothing changed.
    fn apply(state: &mut Self::State, input: &Self::Input) -> Result<String, Self::Error>;

    /// True once the state is terminal (won, lost or tied)
    fn is_finished(state: &Self::State) -> bool;

    /// Put the state back into a fresh round after a "play again"
    fn reset(state: &mut Self::State);
}
