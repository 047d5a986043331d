use std::fmt;

use crate::error::{GameError, GameResult};

/// Row delimiter in puzzle text
pub const ROW_DELIMITER: char = '\n';

/// A rectangular letter grid kept in its delimited text form.
///
/// Rows are separated by a single `\n` and an optional trailing `\n` is
/// allowed. Every row has the same number of characters; [`Grid::parse`]
/// refuses anything else, so lookups never see a ragged grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    text: String,
    row_length: usize,
    row_count: usize,
}

impl Grid {
    /// Validate puzzle text and wrap it as a grid
    pub fn parse(text: impl Into<String>) -> GameResult<Self> {
        let text = text.into();
        let body = text.strip_suffix(ROW_DELIMITER).unwrap_or(text.as_str());

        if body.is_empty() {
            return Err(GameError::MalformedGrid("grid has no rows".to_string()));
        }

        let mut rows = body.split(ROW_DELIMITER);
        // split always yields at least one item
        let row_length = rows.next().map_or(0, |row| row.chars().count());
        if row_length == 0 {
            return Err(GameError::MalformedGrid("row 0 is empty".to_string()));
        }

        let mut row_count = 1;
        for (offset, row) in rows.enumerate() {
            let length = row.chars().count();
            if length != row_length {
                return Err(GameError::MalformedGrid(format!(
                    "row {} has {} characters, expected {}",
                    offset + 1,
                    length,
                    row_length
                )));
            }
            row_count += 1;
        }

        Ok(Self {
            text,
            row_length,
            row_count,
        })
    }

    /// Number of columns
    pub fn row_length(&self) -> usize {
        self.row_length
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Row `index`, sliced out of the raw text at `(row_length + 1) * index`
    /// where the extra character is the delimiter.
    pub fn row(&self, index: usize) -> GameResult<String> {
        self.check_index(index, self.row_count)?;

        let first = (self.row_length + 1) * index;
        Ok(self
            .text
            .chars()
            .skip(first)
            .take(self.row_length)
            .collect())
    }

    /// Column `index`, top to bottom
    pub fn column(&self, index: usize) -> GameResult<String> {
        self.check_index(index, self.row_length)?;

        Ok(self
            .rows()
            .filter_map(|row| row.chars().nth(index))
            .collect())
    }

    /// Iterate rows without their delimiters
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.text
            .strip_suffix(ROW_DELIMITER)
            .unwrap_or(self.text.as_str())
            .split(ROW_DELIMITER)
    }

    fn check_index(&self, index: usize, limit: usize) -> GameResult<()> {
        if index < limit {
            Ok(())
        } else {
            Err(GameError::InvalidIndex { index, limit })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Reverse a line of characters
pub fn reverse(line: &str) -> String {
    line.chars().rev().collect()
}

/// Whether `needle` appears contiguously in `haystack`. Case-sensitive; the
/// empty needle is always contained.
pub fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}
