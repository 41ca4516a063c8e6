//! Diagnostic rendering backends for human-readable output.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use bloxd_source::SourceFile;
use owo_colors::OwoColorize;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic found in `file`.
    fn render(&self, diag: &Diagnostic, file: &SourceFile) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// warning[W101]: Avoid var; use let/const
///   --> scripts/main.js:3:1
///   |
/// 3 | var x = 1;
///   | ^^^^^
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn header(&self, diag: &Diagnostic) -> String {
        let label = format!("{}[{}]", diag.severity, diag.code);
        if !self.color {
            return label;
        }
        match diag.severity {
            Severity::Error => label.red().bold().to_string(),
            Severity::Warning => label.yellow().bold().to_string(),
            Severity::Info | Severity::Hint => label.cyan().bold().to_string(),
        }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, file: &SourceFile) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}: {}\n", self.header(diag), diag.message));
        out.push_str(&format!(
            "  --> {}:{}\n",
            file.path.display(),
            diag.range
        ));

        let Some(line_content) = file.line_text(diag.range.start_line) else {
            return out;
        };
        let line_num = diag.range.start_line.to_string();
        let padding = " ".repeat(line_num.len());

        out.push_str(&format!("{padding} |\n"));
        out.push_str(&format!("{line_num} | {line_content}\n"));

        let col_padding = " ".repeat(diag.range.start_column.saturating_sub(1) as usize);
        let carets = "^".repeat(diag.range.width().max(1) as usize);
        let carets = if self.color {
            carets.bold().to_string()
        } else {
            carets
        };
        out.push_str(&format!("{padding} | {col_padding}{carets}\n"));

        out
    }
}
