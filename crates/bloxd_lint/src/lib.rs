//! Line-based lint rules and engine for Bloxd scripts.
//!
//! Bloxd scripting is a restricted JavaScript dialect. This crate scans a
//! script buffer line by line and reports the constructs the dialect rejects
//! or discourages.
//!
//! # Rules
//!
//! Evaluated in this order on every line:
//!
//! - **W101 `no-var`:** `var` declarations (warning)
//! - **E101 `no-line-comment`:** `//` line comments (error)
//! - **E102 `no-async-await`:** the `async` and `await` keywords (error)
//!
//! Each rule reports at most its first match on a given line.

#![warn(missing_docs)]

mod engine;
mod error;
mod helpers;
mod rules;

use std::ops::Range;

pub use engine::LintEngine;
pub use error::LintError;
pub use helpers::token_range;
pub use rules::register_builtin_rules;
pub use rules::{NoAsyncAwait, NoLineComment, NoVar};

use bloxd_diagnostics::{Diagnostic, DiagnosticCode, Severity};
use once_cell::sync::Lazy;

static DEFAULT_ENGINE: Lazy<LintEngine> = Lazy::new(LintEngine::with_defaults);

/// Scans a script buffer with the built-in rules and default configuration.
///
/// `None` and the empty string yield no diagnostics. The result is ordered by
/// line, then by rule evaluation order, and is identical for identical input.
pub fn scan(text: Option<&str>) -> Vec<Diagnostic> {
    DEFAULT_ENGINE.scan(text)
}

/// A single lint rule applied to each line of a script.
///
/// Each rule has a unique diagnostic code, a kebab-case name, a description,
/// a fixed message, and a default severity. Rules only need to locate their
/// first offending token in a line; [`check_line`](LintRule::check_line)
/// turns that into a positioned [`Diagnostic`].
pub trait LintRule: Send + Sync {
    /// Returns the diagnostic code for this rule (e.g., W101, E102).
    fn code(&self) -> DiagnosticCode;

    /// Returns the short kebab-case name of this rule (e.g., "no-var").
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this rule checks.
    fn description(&self) -> &str;

    /// Returns the message attached to every diagnostic of this rule.
    fn message(&self) -> &str;

    /// Returns the default severity for diagnostics emitted by this rule.
    fn default_severity(&self) -> Severity;

    /// Returns the byte range of the first offending token in `line`, if any.
    fn find(&self, line: &str) -> Option<Range<usize>>;

    /// Checks one line and returns a diagnostic for the first match.
    fn check_line(&self, line_number: u32, line: &str) -> Option<Diagnostic> {
        let token = self.find(line)?;
        Some(Diagnostic::new(
            self.default_severity(),
            self.code(),
            self.name(),
            self.message(),
            token_range(line_number, line, token),
        ))
    }
}
