//! Conversion of the solver's textual score dump into the `S` matrix.
//!
//! The solver writes its pairing scores as a loosely formatted text file:
//! header lines, then a rectangular block of integers where row `i` holds
//! the upper-triangular scores for positions `i..n`, left-padded with
//! zeros. [`parse_score_dump`] recovers an `n x n` matrix from that dump.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pairwise score matrix, row-major.
pub type ScoreMatrix = Vec<Vec<i64>>;

/// On-disk / wire shape of a fold result: `{"S": [[..]]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDocument {
    #[serde(rename = "S")]
    pub s: ScoreMatrix,
}

/// Errors recovering a matrix from a solver dump.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("Solver dump contains no numbers")]
    Empty,

    #[error("Solver dump has no numeric rows with at least 2 columns")]
    NoBlock,
}

static NUM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+").expect("valid regex"));

/// Parse a solver score dump into an `n x n` [`ScoreMatrix`].
///
/// - Extracts the signed integers of every line, skipping lines without any.
/// - Keeps only the dominant rectangular block: rows whose width equals the
///   most frequent width among rows with at least 2 columns. Header lines
///   and stray counters fall outside the block and are dropped.
/// - `n` is the smaller of the block's height and width. Each surviving
///   row is trimmed of leading zeros and re-aligned so its first value
///   lands on the diagonal: row `i`'s values fill columns `i..`, truncated
///   at column `n`.
pub fn parse_score_dump(text: &str) -> Result<ScoreMatrix, MatrixError> {
    let rows: Vec<Vec<i64>> = text
        .lines()
        .map(|line| {
            NUM_RE
                .find_iter(line)
                .filter_map(|m| m.as_str().parse::<i64>().ok())
                .collect::<Vec<_>>()
        })
        .filter(|nums| !nums.is_empty())
        .collect();

    if rows.is_empty() {
        return Err(MatrixError::Empty);
    }

    let mode_len = dominant_width(&rows).ok_or(MatrixError::NoBlock)?;
    let block: Vec<&Vec<i64>> = rows.iter().filter(|r| r.len() == mode_len).collect();

    let n = block.len().min(mode_len);
    let mut s = vec![vec![0i64; n]; n];

    for (i, row) in block.iter().take(n).enumerate() {
        let trimmed = &row[row.iter().take_while(|v| **v == 0).count()..];
        let m = trimmed.len().min(n - i);
        for (j, value) in trimmed.iter().take(m).enumerate() {
            s[i][i + j] = *value;
        }
    }

    Ok(s)
}

/// Most frequent row width among rows with at least 2 columns.
///
/// Ties resolve to the width seen first, matching insertion order.
fn dominant_width(rows: &[Vec<i64>]) -> Option<usize> {
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for row in rows.iter().filter(|r| r.len() >= 2) {
        match counts.iter_mut().find(|(len, _)| *len == row.len()) {
            Some((_, count)) => *count += 1,
            None => counts.push((row.len(), 1)),
        }
    }
    counts
        .into_iter()
        .max_by_key(|(_, count)| *count)
        .map(|(len, _)| len)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
