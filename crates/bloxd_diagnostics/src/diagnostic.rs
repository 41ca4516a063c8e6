//! The diagnostic record produced by the Bloxd scanner.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use bloxd_source::LineRange;
use serde::{Deserialize, Serialize};

/// Source tag attached to every diagnostic produced by the built-in rules.
pub const SOURCE: &str = "bloxd-linter";

/// One flagged issue in a script buffer.
///
/// `line`/`column` repeat the start of `range` so the serialized form carries
/// both the legacy single-position fields and the full range, e.g.
/// `{"line":1,"column":1,"startLine":1,"startColumn":1,"endLine":1,"endColumn":6,...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// The line the issue starts on (1-indexed).
    pub line: u32,
    /// The column the matched token starts at (1-indexed).
    pub column: u32,
    /// The range of the offending token, end column exclusive.
    #[serde(flatten)]
    pub range: LineRange,
    /// The human-readable message.
    pub message: String,
    /// The severity level.
    pub severity: Severity,
    /// The producing rule engine.
    pub source: String,
    /// The code of the rule that fired.
    pub code: DiagnosticCode,
    /// The kebab-case name of the rule that fired.
    pub rule: String,
}

impl Diagnostic {
    /// Creates a diagnostic for the given rule at `range`.
    pub fn new(
        severity: Severity,
        code: DiagnosticCode,
        rule: impl Into<String>,
        message: impl Into<String>,
        range: LineRange,
    ) -> Self {
        Self {
            line: range.start_line,
            column: range.start_column,
            range,
            message: message.into(),
            severity,
            source: SOURCE.to_string(),
            code,
            rule: rule.into(),
        }
    }

    /// Creates a new error diagnostic.
    pub fn error(
        code: DiagnosticCode,
        rule: impl Into<String>,
        message: impl Into<String>,
        range: LineRange,
    ) -> Self {
        Self::new(Severity::Error, code, rule, message, range)
    }

    /// Creates a new warning diagnostic.
    pub fn warning(
        code: DiagnosticCode,
        rule: impl Into<String>,
        message: impl Into<String>,
        range: LineRange,
    ) -> Self {
        Self::new(Severity::Warning, code, rule, message, range)
    }

    /// Replaces the severity, keeping everything else.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Category;

    fn code() -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 101)
    }

    #[test]
    fn create_warning() {
        let diag = Diagnostic::warning(code(), "no-var", "Avoid var", LineRange::on_line(3, 5, 5));
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.line, 3);
        assert_eq!(diag.column, 5);
        assert_eq!(diag.range.end_column, 10);
        assert_eq!(diag.source, SOURCE);
    }

    #[test]
    fn with_severity_overrides() {
        let diag = Diagnostic::warning(code(), "no-var", "Avoid var", LineRange::on_line(1, 1, 5))
            .with_severity(Severity::Error);
        assert!(diag.severity.is_error());
    }

    #[test]
    fn serialized_shape_has_flat_range() {
        let diag = Diagnostic::error(
            DiagnosticCode::new(Category::Error, 101),
            "no-line-comment",
            "no comments",
            LineRange::on_line(2, 4, 2),
        );
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["line"], 2);
        assert_eq!(json["column"], 4);
        assert_eq!(json["startLine"], 2);
        assert_eq!(json["startColumn"], 4);
        assert_eq!(json["endLine"], 2);
        assert_eq!(json["endColumn"], 6);
        assert_eq!(json["severity"], "error");
        assert_eq!(json["source"], "bloxd-linter");
        assert_eq!(json["code"], "E101");
        assert_eq!(json["rule"], "no-line-comment");

        let back: Diagnostic = serde_json::from_value(json).unwrap();
        assert_eq!(back, diag);
    }
}
