//! E102: `async` and `await`. The Bloxd runtime has no asynchronous execution.

use std::ops::Range;

use bloxd_diagnostics::{Category, DiagnosticCode, Severity};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::helpers::first_match;
use crate::LintRule;

static ASYNC_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)(?:async|await)(?-u:\b)").expect("async pattern is valid")
});

/// Detects `async` or `await` as whole words.
///
/// Whichever keyword appears first on the line is reported; `asyncTask` or
/// `awaiting` do not match. Word boundaries only consider ASCII word
/// characters, so a keyword next to a non-ASCII letter still counts.
pub struct NoAsyncAwait;

impl LintRule for NoAsyncAwait {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 102)
    }

    fn name(&self) -> &str {
        "no-async-await"
    }

    fn description(&self) -> &str {
        "async functions and await expressions are rejected by the Bloxd runtime"
    }

    fn message(&self) -> &str {
        "Async/await is not allowed in Bloxd scripting."
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn find(&self, line: &str) -> Option<Range<usize>> {
        first_match(&ASYNC_KEYWORD, line)
    }
}
