use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

use crate::game::Grid;

/// Load a puzzle grid from a text file
pub async fn load<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read puzzle file {}", path.display()))?;

    let grid = Grid::parse(content)
        .with_context(|| format!("Invalid puzzle in {}", path.display()))?;

    tracing::info!(
        "Loaded {}x{} puzzle from {}",
        grid.row_count(),
        grid.row_length(),
        path.display()
    );

    Ok(grid)
}
