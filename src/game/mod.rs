// Word lookup and scoring

pub mod grid;
pub mod scorer;

pub use grid::{contains, reverse, Grid};
pub use scorer::{Scorer, ScoringRules, BONUS, THRESHOLD};
