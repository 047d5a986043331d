use serde::{Deserialize, Serialize};

use crate::{
    error::GameResult,
    game::grid::{contains, reverse, Grid},
    models::{Direction, Guess, GuessOutcome},
};

/// Words-left count at or above which a find earns the flat base score
pub const THRESHOLD: u32 = 5;
/// Extra points for finding the last remaining word
pub const BONUS: u32 = 12;

/// Tunable scoring constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub threshold: u32,
    pub bonus: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            threshold: THRESHOLD,
            bonus: BONUS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scorer {
    rules: ScoringRules,
}

impl Scorer {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    /// Points for finding a word in `direction` with `words_left` words
    /// still hidden.
    ///
    /// Scoring rules:
    /// - While `words_left >= threshold` a find is worth `threshold * factor`
    /// - Below the threshold it is worth `(2 * threshold - words_left) * factor`,
    ///   so late finds pay more
    /// - The last word (`words_left == 1`) earns a flat bonus on top
    pub fn points(&self, direction: Direction, words_left: u32) -> u32 {
        let ScoringRules { threshold, bonus } = self.rules;
        let factor = direction.factor();

        let base = if words_left >= threshold {
            threshold
        } else {
            threshold.saturating_mul(2) - words_left
        };
        let mut points = base.saturating_mul(factor);

        if words_left == 1 {
            points = points.saturating_add(bonus);
        }

        points
    }

    /// Points earned if `guessed_word` reads in `direction` along row or
    /// column `index`, otherwise 0.
    pub fn check_guess(
        &self,
        grid: &Grid,
        direction: Direction,
        guessed_word: &str,
        index: usize,
        words_left: u32,
    ) -> GameResult<u32> {
        if !self.locate(grid, direction, guessed_word, index)? {
            return Ok(0);
        }

        let points = self.points(direction, words_left);
        tracing::debug!(
            "Found {:?} reading {} at {} for {} points",
            guessed_word,
            direction,
            index,
            points
        );
        Ok(points)
    }

    /// Evaluate a guess and keep the details alongside the points
    pub fn evaluate(&self, grid: &Grid, guess: &Guess, words_left: u32) -> GameResult<GuessOutcome> {
        let found = self.locate(grid, guess.direction, &guess.word, guess.index)?;
        let points = if found {
            self.points(guess.direction, words_left)
        } else {
            0
        };

        Ok(GuessOutcome {
            guess: guess.clone(),
            found,
            points,
            words_left,
        })
    }

    /// Whether `word` reads in `direction` along row or column `index`
    fn locate(&self, grid: &Grid, direction: Direction, word: &str, index: usize) -> GameResult<bool> {
        let line = if direction.is_vertical() {
            grid.column(index)?
        } else {
            grid.row(index)?
        };
        let line = if direction.is_reversed() {
            reverse(&line)
        } else {
            line
        };

        Ok(contains(&line, word))
    }
}
