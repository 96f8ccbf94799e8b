/// Macro to register games in the hub with metadata pulled from trait constants
///
/// Usage in games/mod.rs:
/// ```ignore
/// register_games! {
///     tictactoe => TicTacToeGame,
///     hangman => HangmanGame,
/// }
/// ```
#[macro_export]
macro_rules! register_games {
    ( $( $module:ident => $game:ident ),* $(,)? ) => {
        /// All bundled games with their metadata
        pub fn all_games() -> Vec<GameInfo> {
            vec![
                $(
                    {
                        use $crate::core::game::ParlorGame;
                        use $crate::games::$module::$game;

                        GameInfo {
                            id: <$game>::ID,
                            name: <$game>::NAME,
                            description: <$game>::DESCRIPTION,
                            min_players: <$game>::MIN_PLAYERS,
                            max_players: <$game>::MAX_PLAYERS,
                        }
                    }
                ),*
            ]
        }

        /// Look up a game by ID
        pub fn find_game(id: &str) -> Option<GameInfo> {
            all_games().into_iter().find(|g| g.id == id)
        }
    };
}
