//! Word lookup and scoring for the two-player word search game
//! "Where's That Word?".
//!
//! A puzzle is a rectangular letter grid. Players guess a word, a direction
//! and a row or column; [`Scorer::check_guess`] says how many points the
//! guess is worth.

pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod puzzle;

pub use error::{GameError, GameResult};
pub use game::{Grid, Scorer, ScoringRules};
pub use models::{Direction, GameOutcome, Guess, GuessOutcome, Player};
