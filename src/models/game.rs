use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Score multiplier for a word read left to right
pub const FORWARD_FACTOR: u32 = 1;
/// Score multiplier for a word read top to bottom
pub const DOWN_FACTOR: u32 = 2;
/// Score multiplier for a word read right to left
pub const BACKWARD_FACTOR: u32 = 3;
/// Score multiplier for a word read bottom to top
pub const UP_FACTOR: u32 = 4;

/// Reading direction of a word in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Forward,
    Backward,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Forward,
        Direction::Backward,
    ];

    /// Multiplicative factor awarded for finding a word in this direction
    pub fn factor(self) -> u32 {
        match self {
            Direction::Up => UP_FACTOR,
            Direction::Down => DOWN_FACTOR,
            Direction::Forward => FORWARD_FACTOR,
            Direction::Backward => BACKWARD_FACTOR,
        }
    }

    /// Up and down read columns; forward and backward read rows
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Up and backward read their line in reverse
    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::Up | Direction::Backward)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }

    /// Parse a direction the permissive way: anything that is not exactly
    /// up, down or forward is treated as backward.
    pub fn parse_lenient(text: &str) -> Self {
        match Direction::ALL.into_iter().find(|d| d.as_str() == text) {
            Some(direction) => direction,
            None => {
                tracing::warn!(
                    "Unrecognised direction {:?}, scoring it as backward",
                    text
                );
                Direction::Backward
            }
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GameError::UnknownDirection(s.to_string()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two players taking turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Whose turn it is, given whether player one is up
    pub fn current(is_player_one_turn: bool) -> Self {
        if is_player_one_turn {
            Player::One
        } else {
            Player::Two
        }
    }

    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => f.write_str("player one"),
            Player::Two => f.write_str("player two"),
        }
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    PlayerOneWins,
    PlayerTwoWins,
    Tie,
}

impl GameOutcome {
    /// Compare final scores; equal scores are a tie
    pub fn from_scores(player_one_score: u32, player_two_score: u32) -> Self {
        use std::cmp::Ordering;

        match player_one_score.cmp(&player_two_score) {
            Ordering::Greater => GameOutcome::PlayerOneWins,
            Ordering::Less => GameOutcome::PlayerTwoWins,
            Ordering::Equal => GameOutcome::Tie,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::PlayerOneWins => Some(Player::One),
            GameOutcome::PlayerTwoWins => Some(Player::Two),
            GameOutcome::Tie => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::PlayerOneWins => f.write_str("player one wins"),
            GameOutcome::PlayerTwoWins => f.write_str("player two wins"),
            GameOutcome::Tie => f.write_str("tie game"),
        }
    }
}

/// A word a player claims to have found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub word: String,
    pub direction: Direction,
    /// Row for forward/backward, column for up/down
    pub index: usize,
}

/// Outcome of evaluating a guess against the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub guess: Guess,
    pub found: bool,
    pub points: u32,
    pub words_left: u32,
}
