use std::env;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::game::{ScoringRules, BONUS, THRESHOLD};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub puzzle: PuzzleConfig,
    pub scoring: ScoringRules,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleConfig {
    pub puzzle_file: String,
    /// Reject unknown direction names instead of scoring them as backward
    pub strict_directions: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let puzzle = PuzzleConfig {
            puzzle_file: lookup("PUZZLE_FILE").unwrap_or_else(|| "puzzle1.txt".to_string()),
            strict_directions: lookup("STRICT_DIRECTIONS")
                .unwrap_or_else(|| "true".to_string())
                .trim()
                .parse()
                .context("STRICT_DIRECTIONS must be true or false")?,
        };

        let scoring = ScoringRules {
            threshold: lookup("SCORE_THRESHOLD")
                .unwrap_or_else(|| THRESHOLD.to_string())
                .trim()
                .parse()
                .context("SCORE_THRESHOLD must be a number")?,
            bonus: lookup("SCORE_BONUS")
                .unwrap_or_else(|| BONUS.to_string())
                .trim()
                .parse()
                .context("SCORE_BONUS must be a number")?,
        };

        Ok(Config { puzzle, scoring })
    }

    pub fn puzzle_file(&self) -> &str {
        &self.puzzle.puzzle_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.puzzle_file(), "puzzle1.txt");
        assert!(config.puzzle.strict_directions);
        assert_eq!(config.scoring, ScoringRules::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PUZZLE_FILE", "puzzle2.txt"),
            ("STRICT_DIRECTIONS", "false"),
            ("SCORE_THRESHOLD", " 7 "),
            ("SCORE_BONUS", "20"),
        ]))
        .unwrap();
        assert_eq!(config.puzzle_file(), "puzzle2.txt");
        assert!(!config.puzzle.strict_directions);
        assert_eq!(config.scoring.threshold, 7);
        assert_eq!(config.scoring.bonus, 20);
    }

    #[test]
    fn test_invalid_number() {
        let err = Config::from_lookup(lookup_from(&[("SCORE_BONUS", "lots")])).unwrap_err();
        assert!(err.to_string().contains("SCORE_BONUS"));
    }
}
