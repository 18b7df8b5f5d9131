//! Plain-text grid ingestion.
//!
//! Grids are written one row per line with whitespace-separated integers.
//! Blank lines are skipped, and every remaining row must have the same width.

use std::io::{self, BufRead};

use ccl_core::{LabelError, OwnedGrid};
use thiserror::Error;

/// Errors raised while reading a textual grid.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GridParseError {
    /// The input contained no rows.
    #[error("grid input contained no rows")]
    Empty,
    /// A row's width differs from the first row.
    #[error("row {line} has {actual} values but the first row has {expected}")]
    RaggedRow {
        /// One-based line number of the offending row.
        line: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },
    /// A token could not be parsed as an integer.
    #[error("invalid value `{token}` on line {line}")]
    InvalidValue {
        /// One-based line number of the token.
        line: usize,
        /// Raw token text.
        token: String,
    },
    /// Reading from the underlying stream failed.
    #[error("failed to read grid input: {0}")]
    Read(#[from] io::Error),
    /// The parsed rows could not form a grid.
    #[error(transparent)]
    Grid(#[from] LabelError),
}

/// Parses a whitespace-separated integer grid from `reader`.
///
/// # Errors
/// Returns [`GridParseError`] when the input is empty, ragged, holds a
/// non-integer token, or cannot be read.
///
/// # Examples
/// ```
/// use ccl_core::GridSource;
/// use ccl_cli::cli::parse_grid;
///
/// let grid = parse_grid("demo", "1 0\n\n0 1\n".as_bytes())?;
/// assert_eq!((grid.width(), grid.height()), (2, 2));
/// # Ok::<(), ccl_cli::cli::GridParseError>(())
/// ```
pub fn parse_grid(name: impl Into<String>, reader: impl BufRead) -> Result<OwnedGrid, GridParseError> {
    let mut values = Vec::new();
    let mut width = None;
    let mut height = 0_usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let row = parse_row(&line, number)?;
        if row.is_empty() {
            continue;
        }
        match width {
            None => width = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(GridParseError::RaggedRow {
                    line: number,
                    expected,
                    actual: row.len(),
                });
            }
            Some(_) => {}
        }
        values.extend(row);
        height += 1;
    }

    let width = width.ok_or(GridParseError::Empty)?;
    Ok(OwnedGrid::new(name, values, width, height)?)
}

fn parse_row(line: &str, number: usize) -> Result<Vec<i64>, GridParseError> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| GridParseError::InvalidValue {
                    line: number,
                    token: token.to_owned(),
                })
        })
        .collect()
}
