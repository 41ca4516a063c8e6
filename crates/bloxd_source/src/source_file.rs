//! Script text with a line view matching the scanner's splitting policy.

use crate::file_id::FileId;
use std::path::PathBuf;

/// Splits `text` into `(line_number, line)` pairs on `'\n'`.
///
/// Line numbers start at 1. Carriage returns are left in place, so a CRLF
/// buffer yields lines ending in `'\r'`. A trailing newline produces a final
/// empty line, and the empty string produces a single empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = (u32, &str)> {
    text.split('\n')
        .enumerate()
        .map(|(idx, line)| (idx as u32 + 1, line))
}

/// Converts a byte offset within `line` into a 1-based UTF-16 column.
///
/// Columns count UTF-16 code units, the unit editor hosts address text in:
/// a character outside the Basic Multilingual Plane occupies two columns.
/// Offsets that do not fall on a char boundary are rounded down to the
/// previous boundary; offsets past the end map to one past the last column.
pub fn utf16_column(line: &str, byte_offset: usize) -> u32 {
    let mut offset = byte_offset.min(line.len());
    while !line.is_char_boundary(offset) {
        offset -= 1;
    }
    let units: usize = line[..offset].chars().map(char::len_utf16).sum();
    units as u32 + 1
}

/// A script buffer loaded into the [`SourceDb`](crate::SourceDb).
pub struct SourceFile {
    /// The identifier for this file within its database.
    pub id: FileId,
    /// The filesystem path, or a synthetic name such as `<stdin>`.
    pub path: PathBuf,
    /// The full text content of the file.
    pub content: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Creates a new `SourceFile` with precomputed line starts.
    pub fn new(id: FileId, path: PathBuf, content: String) -> Self {
        let line_starts = compute_line_starts(&content);
        Self {
            id,
            path,
            content,
            line_starts,
        }
    }

    /// Number of lines as seen by [`split_lines`].
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Returns the text of a 1-based line without its `'\n'` terminator.
    ///
    /// A trailing `'\r'` is stripped here since this view is only used for
    /// display.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let idx = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.content.len(), |next| next - 1);
        let text = &self.content[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}

fn compute_line_starts(content: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}
