//! Position helpers shared by the line rules.

use std::ops::Range;

use bloxd_source::{utf16_column, LineRange};
use regex::Regex;

/// Converts the byte range of a token within `line` into a 1-based [`LineRange`].
///
/// Columns count UTF-16 code units, matching how editor hosts address a line.
pub fn token_range(line_number: u32, line: &str, token: Range<usize>) -> LineRange {
    let start = utf16_column(line, token.start);
    let end = utf16_column(line, token.end);
    LineRange::new(line_number, start, line_number, end)
}

/// Byte range of the leftmost match of `pattern` in `line`.
pub(crate) fn first_match(pattern: &Regex, line: &str) -> Option<Range<usize>> {
    pattern.find(line).map(|m| m.range())
}
