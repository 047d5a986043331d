pub mod game;

pub use game::{
    // Scoring inputs
    Direction, Guess,
    // Scoring outputs
    GameOutcome, GuessOutcome, Player,
    // Direction multipliers
    BACKWARD_FACTOR, DOWN_FACTOR, FORWARD_FACTOR, UP_FACTOR,
};
