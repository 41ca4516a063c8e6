//! E101: line comments. Bloxd scripting only accepts block comments.

use std::ops::Range;

use bloxd_diagnostics::{Category, DiagnosticCode, Severity};

use crate::LintRule;

const LINE_COMMENT: &str = "//";

/// Detects the `//` sequence anywhere in a line.
///
/// This is a plain substring search: `//` inside a string literal such as
/// `"https://bloxd.io"` is reported as well.
pub struct NoLineComment;

impl LintRule for NoLineComment {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 101)
    }

    fn name(&self) -> &str {
        "no-line-comment"
    }

    fn description(&self) -> &str {
        "line comments are rejected by the Bloxd runtime"
    }

    fn message(&self) -> &str {
        "Line comments (//) are not allowed in Bloxd scripting. Use block comments (/* */) instead."
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn find(&self, line: &str) -> Option<Range<usize>> {
        line.find(LINE_COMMENT)
            .map(|start| start..start + LINE_COMMENT.len())
    }
}
