//! Conformance test helpers for the Bloxd script linter.
//!
//! Provides shared functions that run script text through configuration
//! loading and the lint engine, returning structured results for assertion
//! in integration tests.

#![warn(missing_docs)]

use bloxd_config::ProjectConfig;
use bloxd_diagnostics::{Diagnostic, Severity};
use bloxd_lint::LintEngine;
use bloxd_source::{FileId, SourceDb};

/// Result of linting one or more script buffers.
pub struct LintResult {
    /// All diagnostics, grouped by file in load order.
    pub files: Vec<(FileId, Vec<Diagnostic>)>,
    /// All diagnostics, flattened in file order.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether any errors were emitted.
    pub has_errors: bool,
    /// Number of error-severity diagnostics.
    pub error_count: usize,
    /// Number of warning-severity diagnostics.
    pub warning_count: usize,
}

/// Creates a minimal `ProjectConfig` with default lint settings.
pub fn make_config() -> ProjectConfig {
    bloxd_config::load_config_from_str(
        r#"
[project]
name = "conformance_test"
version = "0.1.0"
"#,
    )
    .unwrap()
}

/// Creates a `ProjectConfig` with lint deny/allow/warn overrides.
pub fn make_config_with_lint(deny: &[&str], allow: &[&str], warn: &[&str]) -> ProjectConfig {
    let list = |entries: &[&str]| {
        entries
            .iter()
            .map(|s| format!("\"{s}\""))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let toml_str = format!(
        r#"
[project]
name = "conformance_test"
version = "0.1.0"

[lint]
deny = [{deny}]
allow = [{allow}]
warn = [{warn}]
"#,
        deny = list(deny),
        allow = list(allow),
        warn = list(warn),
    );
    toml::from_str(&toml_str).unwrap()
}

/// Lints a single script with the default configuration.
pub fn lint(source: &str) -> LintResult {
    lint_files(&[("main.js", source)], &make_config())
}

/// Lints a single script with lint overrides.
pub fn lint_with(source: &str, deny: &[&str], allow: &[&str], warn: &[&str]) -> LintResult {
    lint_files(
        &[("main.js", source)],
        &make_config_with_lint(deny, allow, warn),
    )
}

/// Lints several scripts with one configuration.
///
/// Each entry in `files` is `(filename, source_text)`.
pub fn lint_files(files: &[(&str, &str)], config: &ProjectConfig) -> LintResult {
    let mut source_db = SourceDb::new();
    for (name, source) in files {
        source_db.add_source(*name, source.to_string());
    }

    let engine = LintEngine::try_new(&config.lint).expect("lint config should name known rules");
    let files: Vec<(FileId, Vec<Diagnostic>)> = source_db
        .files()
        .map(|f| (f.id, engine.scan(Some(f.content.as_str()))))
        .collect();

    let diagnostics: Vec<Diagnostic> = files.iter().flat_map(|(_, d)| d.clone()).collect();
    let error_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warning_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();

    LintResult {
        files,
        diagnostics,
        has_errors: error_count > 0,
        error_count,
        warning_count,
    }
}
