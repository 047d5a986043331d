use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wheres_that_word::{config::Config, puzzle, Direction, GameOutcome, Guess, Scorer};

#[derive(Parser)]
#[command(
    name = "wheres-that-word",
    about = "Score guesses for the Where's That Word? puzzle game",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a guessed word against the puzzle and print the points earned
    Check {
        /// One of up, down, forward, backward
        direction: String,
        /// The guessed word
        word: String,
        /// Row (forward/backward) or column (up/down), starting at 0
        index: usize,
        /// Words still hidden in the puzzle, including this one
        words_left: u32,
        /// Puzzle file (overrides PUZZLE_FILE)
        #[arg(short, long = "puzzle")]
        puzzle_file: Option<String>,
        /// Score unknown directions as backward instead of rejecting them
        #[arg(long)]
        lenient: bool,
    },

    /// Announce the winner from the two final scores
    Winner {
        player_one_score: u32,
        player_two_score: u32,
    },
}

/// Parse the direction argument; unknown names are an error only in strict mode
fn resolve_direction(text: &str, strict: bool) -> Result<Direction> {
    if strict {
        Ok(text.parse::<Direction>()?)
    } else {
        Ok(Direction::parse_lenient(text))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wheres_that_word=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    tracing::debug!("Configuration loaded");

    match cli.command {
        Commands::Check {
            direction,
            word,
            index,
            words_left,
            puzzle_file,
            lenient,
        } => {
            let strict = config.puzzle.strict_directions && !lenient;
            let direction = resolve_direction(&direction, strict)?;

            let path = puzzle_file.unwrap_or_else(|| config.puzzle_file().to_string());
            let grid = puzzle::load(&path).await?;

            let scorer = Scorer::new(config.scoring);
            let guess = Guess {
                word,
                direction,
                index,
            };
            let outcome = scorer.evaluate(&grid, &guess, words_left)?;

            tracing::info!(
                "{} {:?} at {}: {} points",
                guess.direction,
                guess.word,
                guess.index,
                outcome.points
            );
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::Winner {
            player_one_score,
            player_two_score,
        } => {
            println!(
                "{}",
                GameOutcome::from_scores(player_one_score, player_two_score)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_direction_strict_rejects_unknown() {
        assert_eq!(resolve_direction("down", true).unwrap(), Direction::Down);
        assert_eq!(resolve_direction("UP", true).unwrap(), Direction::Up);
        assert!(resolve_direction("diagonal", true).is_err());
    }

    #[test]
    fn test_resolve_direction_lenient_falls_back_to_backward() {
        assert_eq!(resolve_direction("diagonal", false).unwrap(), Direction::Backward);
        assert_eq!(resolve_direction("UP", false).unwrap(), Direction::Backward);
        assert_eq!(resolve_direction("up", false).unwrap(), Direction::Up);
    }

    #[test]
    fn test_cli_parses_check_flags() {
        let cli = Cli::try_parse_from([
            "wheres-that-word",
            "check",
            "backward",
            "hgf",
            "1",
            "1",
            "--puzzle",
            "puzzle2.txt",
            "--lenient",
        ])
        .unwrap();

        match cli.command {
            Commands::Check {
                direction,
                puzzle_file,
                lenient,
                words_left,
                ..
            } => {
                assert_eq!(direction, "backward");
                assert_eq!(puzzle_file.as_deref(), Some("puzzle2.txt"));
                assert!(lenient);
                assert_eq!(words_left, 1);
            }
            Commands::Winner { .. } => panic!("expected the check subcommand"),
        }
    }
}
