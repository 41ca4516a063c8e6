//! W101: `var` declarations. Prefer `let` or `const`.

use std::ops::Range;

use bloxd_diagnostics::{Category, DiagnosticCode, Severity};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::helpers::first_match;
use crate::LintRule;

static VAR_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)var\s+[0-9A-Za-z_]+").expect("var pattern is valid")
});

/// Detects the `var` keyword followed by whitespace and an identifier.
///
/// The reported range covers `var`, the whitespace, and the identifier
/// characters that follow, e.g. `var x` in `var x = 1;`. Identifiers that
/// merely contain `var` (`variable`, `myvar`) do not match. Word characters
/// are ASCII only: `var é` is not a declaration, while `évar x` is.
pub struct NoVar;

impl LintRule for NoVar {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 101)
    }

    fn name(&self) -> &str {
        "no-var"
    }

    fn description(&self) -> &str {
        "`var` declarations are function-scoped; use `let` or `const`"
    }

    fn message(&self) -> &str {
        "Avoid var; use let/const"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn find(&self, line: &str) -> Option<Range<usize>> {
        first_match(&VAR_DECL, line)
    }
}
