use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::game::ParlorGame;

pub const BOARD_SIZE: usize = 3;

/// A (row, col) pair on the board
pub type Coord = (usize, usize);

/// Immutable player identity: the label written into cells plus the color a
/// driver should paint it with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub label: char,
    pub color: String,
}

/// The classic two players, X before O
pub fn default_players() -> Vec<Player> {
    vec![
        Player {
            label: 'X',
            color: "blue".to_string(),
        },
        Player {
            label: 'O',
            color: "green".to_string(),
        },
    ]
}

/// One move: a target cell and the label of the player making it. The caller
/// supplies the current player's label; turn order is not re-checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub label: char,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicTacToeError {
    #[error("cell ({row}, {col}) is already taken")]
    CellTaken { row: usize, col: usize },

    #[error("the game already has a winner")]
    GameOver,
}

/// Full game state. Win combinations are computed once per board size and
/// survive resets; everything else is per-round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicTacToeState {
    board_size: usize,
    cells: Vec<Vec<Option<char>>>,
    win_combos: Vec<Vec<Coord>>,
    players: Vec<Player>,
    current: usize,
    has_winner: bool,
    winner_combo: Vec<Coord>,
}

impl TicTacToeState {
    /// Set up an empty board of side `board_size` (any size from 3 up) with
    /// the given players moving in list order.
    pub fn new(players: Vec<Player>, board_size: usize) -> Self {
        debug_assert!(board_size >= 3, "board side must be at least 3");
        debug_assert!(players.len() >= 2, "need at least two players");

        Self {
            board_size,
            cells: vec![vec![None; board_size]; board_size],
            win_combos: winning_combos(board_size),
            players,
            current: 0,
            has_winner: false,
            winner_combo: Vec::new(),
        }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// The label occupying a cell, if any. Coordinates are trusted to be on
    /// the board; drivers gate moves through [`Self::is_valid_move`].
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells[row][col]
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Every precomputed winning line: all rows, all columns, then the two
    /// diagonals. Drivers use these to highlight the winning cells.
    pub fn win_combinations(&self) -> &[Vec<Coord>] {
        &self.win_combos
    }

    /// A move is valid while its target cell is free and nobody has won yet
    pub fn is_valid_move(&self, mv: Move) -> bool {
        let move_was_not_played = self.cells[mv.row][mv.col].is_none();
        let no_winner = !self.has_winner;
        no_winner && move_was_not_played
    }

    /// Write the move into the board, then check every winning combination.
    /// The first fully and uniformly labeled combination ends the game; only
    /// the mover can complete a line on their own move, so rival wins can
    /// never race and scanning in precomputation order is enough.
    pub fn process_move(&mut self, mv: Move) {
        self.cells[mv.row][mv.col] = Some(mv.label);

        for combo in &self.win_combos {
            let first = match combo.first() {
                Some(&(row, col)) => self.cells[row][col],
                None => continue,
            };
            let is_win =
                first.is_some() && combo.iter().all(|&(row, col)| self.cells[row][col] == first);
            if is_win {
                self.has_winner = true;
                self.winner_combo = combo.clone();
                break;
            }
        }

        debug!(
            row = mv.row,
            col = mv.col,
            label = %mv.label,
            winner = self.has_winner,
            "move processed"
        );
    }

    pub fn has_winner(&self) -> bool {
        self.has_winner
    }

    /// The combination that ended the game; empty until there is a winner
    pub fn winner_combo(&self) -> &[Coord] {
        &self.winner_combo
    }

    /// Tied means a full board with no winner. Derived on demand, never cached.
    pub fn is_tied(&self) -> bool {
        let no_winner = !self.has_winner;
        let board_full = self
            .cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()));
        no_winner && board_full
    }

    /// Advance to the next player in the fixed cycle
    pub fn toggle_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Clear the board and winner state for a rematch. Win combinations only
    /// depend on the board size and are kept; whose turn it is also carries
    /// over, matching a table where the next game starts wherever the last
    /// one left off.
    pub fn reset_game(&mut self) {
        for row in &mut self.cells {
            for cell in row.iter_mut() {
                *cell = None;
            }
        }
        self.has_winner = false;
        self.winner_combo.clear();
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new(default_players(), BOARD_SIZE)
    }
}

/// All rows, all columns, main diagonal, anti-diagonal: 2N+2 combinations
/// for an N-sided board. Square boards only.
fn winning_combos(board_size: usize) -> Vec<Vec<Coord>> {
    let mut combos: Vec<Vec<Coord>> = Vec::with_capacity(2 * board_size + 2);

    for row in 0..board_size {
        combos.push((0..board_size).map(|col| (row, col)).collect());
    }
    for col in 0..board_size {
        combos.push((0..board_size).map(|row| (row, col)).collect());
    }
    combos.push((0..board_size).map(|i| (i, i)).collect());
    combos.push((0..board_size).map(|i| (i, board_size - 1 - i)).collect());

    combos
}

/// Pure rules engine - turn prompts and grid rendering live in the driver
#[derive(Clone)]
pub struct TicTacToeGame;

impl ParlorGame for TicTacToeGame {
    type State = TicTacToeState;
    type Input = Move;
    type Error = TicTacToeError;

    const ID: &'static str = "tictactoe";
    const NAME: &'static str = "Tic-Tac-Toe";
    const DESCRIPTION: &'static str = "Claim a full row, column or diagonal of the grid";
    const MIN_PLAYERS: usize = 2;
    const MAX_PLAYERS: usize = 2;

    fn new_game() -> Self::State {
        TicTacToeState::default()
    }

    fn apply(state: &mut Self::State, input: &Move) -> Result<String, TicTacToeError> {
        if state.has_winner() {
            return Err(TicTacToeError::GameOver);
        }
        if !state.is_valid_move(*input) {
            return Err(TicTacToeError::CellTaken {
                row: input.row,
                col: input.col,
            });
        }

        state.process_move(*input);

        if state.has_winner() {
            Ok(format!("Player \"{}\" won!", input.label))
        } else if state.is_tied() {
            Ok("Tied game!".to_string())
        } else {
            state.toggle_player();
            Ok(format!("{}'s turn", state.current_player().label))
        }
    }

    fn is_finished(state: &Self::State) -> bool {
        state.has_winner() || state.is_tied()
    }

    fn reset(state: &mut Self::State) {
        state.reset_game();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize, label: char) -> Move {
        Move { row, col, label }
    }

    #[test]
    fn test_new_board_is_empty() {
        let state = TicTacToeState::default();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(state.cell(row, col), None);
            }
        }
        assert!(!state.has_winner());
        assert!(!state.is_tied());
    }

    #[test]
    fn test_combo_count_is_2n_plus_2() {
        for n in 3..=6 {
            let state = TicTacToeState::new(default_players(), n);
            assert_eq!(state.win_combinations().len(), 2 * n + 2);
        }
    }

    #[test]
    fn test_row_win_records_combo() {
        let mut state = TicTacToeState::default();
        state.process_move(mv(1, 0, 'X'));
        state.process_move(mv(1, 1, 'X'));
        assert!(!state.has_winner());
        state.process_move(mv(1, 2, 'X'));
        assert!(state.has_winner());
        assert_eq!(state.winner_combo(), &[(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_column_win() {
        let mut state = TicTacToeState::default();
        for row in 0..3 {
            state.process_move(mv(row, 2, 'O'));
        }
        assert!(state.has_winner());
        assert_eq!(state.winner_combo(), &[(0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_diagonal_wins() {
        let mut state = TicTacToeState::default();
        for i in 0..3 {
            state.process_move(mv(i, i, 'X'));
        }
        assert_eq!(state.winner_combo(), &[(0, 0), (1, 1), (2, 2)]);

        let mut state = TicTacToeState::default();
        for i in 0..3 {
            state.process_move(mv(i, 2 - i, 'O'));
        }
        assert_eq!(state.winner_combo(), &[(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_win_on_larger_board() {
        let mut state = TicTacToeState::new(default_players(), 5);
        for i in 0..5 {
            state.process_move(mv(i, 4 - i, 'X'));
        }
        assert!(state.has_winner());
        assert_eq!(state.winner_combo().len(), 5);
    }

    #[test]
    fn test_full_board_without_winner_is_tied() {
        let mut state = TicTacToeState::default();
        // X O X / X O O / O X X: no line is uniform
        let layout = [
            (0, 0, 'X'),
            (0, 1, 'O'),
            (0, 2, 'X'),
            (1, 0, 'X'),
            (1, 1, 'O'),
            (1, 2, 'O'),
            (2, 0, 'O'),
            (2, 1, 'X'),
            (2, 2, 'X'),
        ];
        for (row, col, label) in layout {
            state.process_move(mv(row, col, label));
        }
        assert!(!state.has_winner());
        assert!(state.is_tied());
    }

    #[test]
    fn test_taken_cell_is_invalid() {
        let mut state = TicTacToeState::default();
        state.process_move(mv(0, 0, 'X'));
        assert!(!state.is_valid_move(mv(0, 0, 'O')));
        assert!(state.is_valid_move(mv(0, 1, 'O')));
    }

    #[test]
    fn test_no_move_is_valid_after_win() {
        let mut state = TicTacToeState::default();
        for col in 0..3 {
            state.process_move(mv(0, col, 'X'));
        }
        assert!(!state.is_valid_move(mv(2, 2, 'O')));
    }

    #[test]
    fn test_toggle_player_wraps() {
        let mut state = TicTacToeState::default();
        assert_eq!(state.current_player().label, 'X');
        state.toggle_player();
        assert_eq!(state.current_player().label, 'O');
        state.toggle_player();
        assert_eq!(state.current_player().label, 'X');
    }

    #[test]
    fn test_reset_behaves_like_fresh_game() {
        let mut state = TicTacToeState::default();
        for col in 0..3 {
            state.process_move(mv(0, col, 'X'));
        }
        assert!(state.has_winner());

        state.reset_game();
        assert!(!state.has_winner());
        assert!(state.winner_combo().is_empty());
        assert_eq!(state.win_combinations().len(), 8);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(state.cell(row, col), None);
            }
        }

        let fresh = TicTacToeState::default();
        let mut replayed = state.clone();
        let mut from_fresh = fresh.clone();
        replayed.process_move(mv(1, 1, 'O'));
        from_fresh.process_move(mv(1, 1, 'O'));
        assert_eq!(replayed.cell(1, 1), from_fresh.cell(1, 1));
        assert_eq!(replayed.has_winner(), from_fresh.has_winner());
    }

    #[test]
    fn test_apply_reports_turns_and_result() {
        let mut state = TicTacToeGame::new_game();

        let msg = TicTacToeGame::apply(&mut state, &mv(0, 0, 'X')).unwrap();
        assert_eq!(msg, "O's turn");

        let err = TicTacToeGame::apply(&mut state, &mv(0, 0, 'O')).unwrap_err();
        assert_eq!(err, TicTacToeError::CellTaken { row: 0, col: 0 });

        TicTacToeGame::apply(&mut state, &mv(1, 0, 'O')).unwrap();
        TicTacToeGame::apply(&mut state, &mv(0, 1, 'X')).unwrap();
        TicTacToeGame::apply(&mut state, &mv(1, 1, 'O')).unwrap();
        let msg = TicTacToeGame::apply(&mut state, &mv(0, 2, 'X')).unwrap();
        assert_eq!(msg, "Player \"X\" won!");
        assert!(TicTacToeGame::is_finished(&state));

        let err = TicTacToeGame::apply(&mut state, &mv(2, 2, 'O')).unwrap_err();
        assert_eq!(err, TicTacToeError::GameOver);
    }
}
