use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::game::ParlorGame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The computer's move: one uniform draw, no memory of prior rounds
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// The choice this one defeats
    pub fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Choice {
    type Err = RpsError;

    /// Shape check for driver input: the three choice words, any casing
    fn from_str(s: &str) -> Result<Self, RpsError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            _ => Err(RpsError::UnknownChoice(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RpsError {
    #[error("choose 'rock', 'paper' or 'scissors', not '{0}'")]
    UnknownChoice(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Tie,
    PlayerWins,
    ComputerWins,
}

impl Outcome {
    /// The round result line a driver shows verbatim
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Tie => "It's a tie!",
            Outcome::PlayerWins => "Player wins!",
            Outcome::ComputerWins => "Computer wins!",
        }
    }
}

/// Judge one round: equal choices tie, otherwise the fixed beats-relation
/// (rock > scissors > paper > rock) decides.
pub fn determine_winner(player: Choice, computer: Choice) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats() == computer {
        Outcome::PlayerWins
    } else {
        Outcome::ComputerWins
    }
}

/// Everything a driver needs to render one finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub player: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
}

/// Rounds are independent; the state only remembers the last one so a
/// driver can re-render it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RpsState {
    last_round: Option<Round>,
}

impl RpsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_round(&self) -> Option<Round> {
        self.last_round
    }

    /// Draw the computer's choice, judge the round and record it
    pub fn play_round(&mut self, player: Choice) -> Round {
        let computer = Choice::random();
        let outcome = determine_winner(player, computer);
        let round = Round {
            player,
            computer,
            outcome,
        };
        self.last_round = Some(round);

        debug!(player = %player, computer = %computer, outcome = ?outcome, "round judged");
        round
    }

    pub fn reset(&mut self) {
        self.last_round = None;
    }
}

/// Pure round judge - prompting and the play-again loop live in the driver
#[derive(Clone)]
pub struct RpsGame;

impl ParlorGame for RpsGame {
    type State = RpsState;
    type Input = Choice;
    type Error = RpsError;

    const ID: &'static str = "rps";
    const NAME: &'static str = "Rock Paper Scissors";
    const DESCRIPTION: &'static str = "Beat the computer's random throw";
    const MIN_PLAYERS: usize = 1;
    const MAX_PLAYERS: usize = 1;

    fn new_game() -> Self::State {
        RpsState::new()
    }

    fn apply(state: &mut Self::State, input: &Choice) -> Result<String, RpsError> {
        let round = state.play_round(*input);
        Ok(format!(
            "Computer chose {}. {}",
            round.computer,
            round.outcome.message()
        ))
    }

    /// Every round stands alone, so the judge never reaches a terminal state
    fn is_finished(_state: &Self::State) -> bool {
        false
    }

    fn reset(state: &mut Self::State) {
        state.reset();
    }
}
