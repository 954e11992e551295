//! Design decoding and placement for seeding the board.
//!
//! A design file is plain text: one line per seeded row, each line a run of
//! hexadecimal digits. Every digit expands to four bits, most significant
//! first, and a line's bits concatenate left to right. The decoded block is
//! written into a placement rectangle on the board, by convention the
//! central 8x8 box.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors raised while loading or decoding a design file.
#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    #[error("failed to read design file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid hex digit '{found}' at line {line}, column {column}")]
    InvalidHexDigit {
        line: usize,
        column: usize,
        found: char,
    },
}

/// A decoded seed pattern: rows of cell states.
///
/// Not retained by the engine after seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Design {
    rows: Vec<Vec<bool>>,
}

impl Design {
    /// Decode a design from text.
    ///
    /// Blank lines are skipped; the row count is the number of non-empty
    /// lines. Any character outside `0-9a-fA-F` aborts the decode, there is
    /// no partial result.
    pub fn parse(text: &str) -> Result<Self, DesignError> {
        let mut rows = Vec::new();

        for (line_idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut bits = Vec::with_capacity(line.len() * 4);
            for (col_idx, ch) in line.chars().enumerate() {
                let digit = ch.to_digit(16).ok_or(DesignError::InvalidHexDigit {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    found: ch,
                })?;
                // Most significant bit first, zero-padded to width 4
                for shift in (0..4).rev() {
                    bits.push((digit >> shift) & 1 == 1);
                }
            }
            rows.push(bits);
        }

        Ok(Self { rows })
    }

    /// Load and decode a design file. I/O failure is fatal, no retry.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DesignError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Number of decoded rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width in bits of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Count of 1-bits across the whole design.
    pub fn live_bits(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&b| b).count())
            .sum()
    }

    /// Iterate decoded rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Target rectangle for seeding a design onto the board.
///
/// Design rows below `height` and bits right of `width` are ignored, so a
/// file with more lines than the rectangle is tall seeds only the top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Top row of the rectangle on the board.
    pub row: usize,
    /// Leftmost column of the rectangle on the board.
    pub col: usize,
    /// Rectangle width in cells.
    pub width: usize,
    /// Rectangle height in cells.
    pub height: usize,
}

impl Placement {
    /// The central 8x8 box of a board: origin `(rows / 2 - 4, columns / 2 - 4)`.
    ///
    /// On boards smaller than 8 cells per side the origin saturates to the
    /// corner and seeding clips at the board edge.
    pub fn centered_box(rows: usize, columns: usize) -> Self {
        Self {
            row: (rows / 2).saturating_sub(4),
            col: (columns / 2).saturating_sub(4),
            width: 8,
            height: 8,
        }
    }
}
