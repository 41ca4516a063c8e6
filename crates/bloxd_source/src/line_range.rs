//! 1-based line/column ranges shared by the scanner, normalizer, and renderers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A source range in 1-based line/column coordinates.
///
/// `end_column` is exclusive: a range covering the three characters of `var`
/// at the start of a line is `1:1..1:4`. Field names serialize in the camel
/// case used by editor hosts (`startLine`, `startColumn`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRange {
    /// The starting line number (1-indexed).
    pub start_line: u32,
    /// The starting column (1-indexed, inclusive).
    pub start_column: u32,
    /// The ending line number (1-indexed).
    pub end_line: u32,
    /// The ending column (1-indexed, exclusive).
    pub end_column: u32,
}

impl LineRange {
    /// Creates a range from explicit start and end coordinates.
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Creates a range on a single line covering `len` characters from `column`.
    pub fn on_line(line: u32, column: u32, len: u32) -> Self {
        Self::new(line, column, line, column + len)
    }

    /// Returns a copy with every coordinate raised to at least 1.
    pub fn clamped(self) -> Self {
        Self {
            start_line: self.start_line.max(1),
            start_column: self.start_column.max(1),
            end_line: self.end_line.max(1),
            end_column: self.end_column.max(1),
        }
    }

    /// Returns `true` if the range starts and ends on the same line.
    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }

    /// Number of columns covered when the range is on a single line.
    pub fn width(&self) -> u32 {
        if self.is_single_line() {
            self.end_column.saturating_sub(self.start_column)
        } else {
            0
        }
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_column)
    }
}
