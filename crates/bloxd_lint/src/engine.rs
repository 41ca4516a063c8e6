//! Lint engine that manages rule registration, configuration, and execution.
//!
//! The `LintEngine` accepts a `LintConfig` to control which rules are denied,
//! allowed, or warned, then scans a buffer line by line running each enabled
//! rule in registration order.

use std::collections::HashSet;

use bloxd_config::LintConfig;
use bloxd_diagnostics::{Diagnostic, Severity};
use bloxd_source::split_lines;
use tracing::debug;

use crate::error::LintError;
use crate::rules::register_builtin_rules;
use crate::LintRule;

/// The lint engine that runs the registered rules over a script buffer.
///
/// Rules are registered at construction time. Configuration entries may name
/// a rule (`no-var`) or its code (`W101`, case-insensitive). Allowed rules are
/// skipped, denied rules report errors, warned rules report warnings, and all
/// other rules keep their default severity. Deny wins over warn.
pub struct LintEngine {
    /// All registered lint rules, in evaluation order.
    rules: Vec<Box<dyn LintRule>>,
    /// Entries whose rules are promoted to error severity.
    denied: HashSet<String>,
    /// Entries whose rules are suppressed.
    allowed: HashSet<String>,
    /// Entries whose rules are reported as warnings.
    warned: HashSet<String>,
}

impl std::fmt::Debug for LintEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LintEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("denied", &self.denied)
            .field("allowed", &self.allowed)
            .field("warned", &self.warned)
            .finish()
    }
}

impl LintEngine {
    /// Creates a new lint engine configured by the given `LintConfig`.
    ///
    /// All builtin rules are registered automatically. Entries that match no
    /// rule are ignored; use [`try_new`](Self::try_new) to reject them.
    pub fn new(config: &LintConfig) -> Self {
        let mut engine = Self {
            rules: Vec::new(),
            denied: normalize_entries(&config.deny),
            allowed: normalize_entries(&config.allow),
            warned: normalize_entries(&config.warn),
        };

        register_builtin_rules(&mut engine);
        engine
    }

    /// Creates an engine like [`new`](Self::new), failing on entries that
    /// name no builtin rule.
    pub fn try_new(config: &LintConfig) -> Result<Self, LintError> {
        let engine = Self::new(config);
        engine.validate()?;
        Ok(engine)
    }

    /// Creates a new lint engine with default configuration (no overrides).
    pub fn with_defaults() -> Self {
        Self::new(&LintConfig::default())
    }

    /// Registers a lint rule with the engine. It runs after all earlier rules.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all registered rules.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the registered rules in evaluation order.
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Checks that every configuration entry names a registered rule and
    /// that no rule is both denied and allowed, however each entry spells it.
    pub fn validate(&self) -> Result<(), LintError> {
        let mut entries: Vec<&String> = self
            .denied
            .iter()
            .chain(&self.allowed)
            .chain(&self.warned)
            .collect();
        entries.sort();
        for entry in entries {
            if self.resolve_rule(entry).is_none() {
                return Err(LintError::UnknownRule(entry.clone()));
            }
        }

        for rule in &self.rules {
            let rule = rule.as_ref();
            let listed = |set: &HashSet<String>| set.iter().any(|e| rule_matches(rule, e));
            if listed(&self.denied) && listed(&self.allowed) {
                return Err(LintError::ConflictingRule(rule.name().to_string()));
            }
        }
        Ok(())
    }

    /// Returns the name of the rule `entry` refers to, by name or by code.
    pub fn resolve_rule(&self, entry: &str) -> Option<&str> {
        let entry = entry.trim();
        self.rules
            .iter()
            .map(|r| r.as_ref())
            .find(|r| rule_matches(*r, entry))
            .map(|r| r.name())
    }

    /// Rewrites configuration entries to the names of the rules they refer to.
    ///
    /// Unknown entries are kept as written so [`validate`](Self::validate)
    /// can still report them. Duplicates are dropped, keeping first position.
    pub fn canonical_entries(&self, entries: &[String]) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = self
                .resolve_rule(entry)
                .map_or_else(|| entry.trim().to_string(), str::to_string);
            if !out.contains(&name) {
                out.push(name);
            }
        }
        out
    }

    /// Returns `config` with every entry replaced by its rule name.
    pub fn canonicalize(&self, config: &LintConfig) -> LintConfig {
        LintConfig {
            deny: self.canonical_entries(&config.deny),
            allow: self.canonical_entries(&config.allow),
            warn: self.canonical_entries(&config.warn),
        }
    }

    /// Returns the severity `rule` reports at, or `None` if it is allowed.
    pub fn effective_severity(&self, rule: &dyn LintRule) -> Option<Severity> {
        let listed = |set: &HashSet<String>| set.iter().any(|e| rule_matches(rule, e));
        if listed(&self.allowed) {
            None
        } else if listed(&self.denied) {
            Some(Severity::Error)
        } else if listed(&self.warned) {
            Some(Severity::Warning)
        } else {
            Some(rule.default_severity())
        }
    }

    /// Scans a buffer and returns its diagnostics.
    ///
    /// `None` and the empty string yield nothing. Lines are split on `'\n'`;
    /// each line runs every enabled rule in registration order, and each rule
    /// reports at most its first match on that line.
    pub fn scan(&self, text: Option<&str>) -> Vec<Diagnostic> {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return Vec::new();
        };

        let active: Vec<(&dyn LintRule, Severity)> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let rule = rule.as_ref();
                self.effective_severity(rule).map(|sev| (rule, sev))
            })
            .collect();

        let mut diagnostics = Vec::new();
        let mut line_count = 0u32;
        for (line_number, line) in split_lines(text) {
            line_count = line_number;
            for (rule, severity) in &active {
                if let Some(diag) = rule.check_line(line_number, line) {
                    diagnostics.push(diag.with_severity(*severity));
                }
            }
        }

        debug!(
            lines = line_count,
            rules = active.len(),
            diagnostics = diagnostics.len(),
            "scanned buffer"
        );
        diagnostics
    }
}

fn normalize_entries(entries: &[String]) -> HashSet<String> {
    entries.iter().map(|e| e.trim().to_string()).collect()
}

fn rule_matches(rule: &dyn LintRule, entry: &str) -> bool {
    entry == rule.name() || entry.eq_ignore_ascii_case(&rule.code().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::Range;

    use bloxd_diagnostics::{Category, DiagnosticCode};

    struct DummyRule;
    impl LintRule for DummyRule {
        fn code(&self) -> DiagnosticCode {
            DiagnosticCode::new(Category::Warning, 999)
        }
        fn name(&self) -> &str {
            "dummy-rule"
        }
        fn description(&self) -> &str {
            "a test rule"
        }
        fn message(&self) -> &str {
            "dummy warning"
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }
        fn find(&self, line: &str) -> Option<Range<usize>> {
            line.find("dummy").map(|i| i..i + 5)
        }
    }

    fn owned(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    fn config(deny: &[&str], allow: &[&str], warn: &[&str]) -> LintConfig {
        LintConfig {
            deny: owned(deny),
            allow: owned(allow),
            warn: owned(warn),
        }
    }

    #[test]
    fn engine_registers_builtin_rules() {
        let engine = LintEngine::with_defaults();
        assert_eq!(engine.rule_count(), 3);
        assert_eq!(
            engine.rule_names(),
            vec!["no-var", "no-line-comment", "no-async-await"]
        );
    }

    #[test]
    fn engine_custom_rule_runs_last() {
        let mut engine = LintEngine::with_defaults();
        engine.register(Box::new(DummyRule));
        let diags = engine.scan(Some("var dummy = 1;"));
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].rule, "no-var");
        assert_eq!(diags[1].message, "dummy warning");
    }

    #[test]
    fn empty_and_missing_text() {
        let engine = LintEngine::with_defaults();
        assert!(engine.scan(None).is_empty());
        assert!(engine.scan(Some("")).is_empty());
        assert!(engine.scan(Some("\n\n")).is_empty());
    }

    #[test]
    fn allow_suppresses_rule_by_name() {
        let engine = LintEngine::new(&config(&[], &["no-var"], &[]));
        let diags = engine.scan(Some("var x = 1; // c"));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].rule, "no-line-comment");
    }

    #[test]
    fn allow_suppresses_rule_by_code() {
        let engine = LintEngine::new(&config(&[], &["e101"], &[]));
        assert!(engine.scan(Some("// c")).is_empty());
    }

    #[test]
    fn deny_promotes_severity() {
        let engine = LintEngine::new(&config(&["W101"], &[], &[]));
        let diags = engine.scan(Some("var x = 1;"));
        assert_eq!(diags[0].severity, Severity::Error);
    }

    #[test]
    fn warn_demotes_severity() {
        let engine = LintEngine::new(&config(&[], &[], &["no-async-await"]));
        let diags = engine.scan(Some("await x;"));
        assert_eq!(diags[0].severity, Severity::Warning);
    }

    #[test]
    fn deny_wins_over_warn() {
        let engine = LintEngine::new(&config(&["no-var"], &[], &["no-var"]));
        let diags = engine.scan(Some("var x;"));
        assert_eq!(diags[0].severity, Severity::Error);
    }

    #[test]
    fn try_new_rejects_unknown_rule() {
        let err = LintEngine::try_new(&config(&["no-eval"], &[], &[]))
            .err()
            .unwrap();
        assert_eq!(err, LintError::UnknownRule("no-eval".to_string()));
        assert!(LintEngine::try_new(&config(&["W101"], &["no-line-comment"], &[])).is_ok());
    }

    #[test]
    fn try_new_rejects_rule_both_denied_and_allowed() {
        let err = LintEngine::try_new(&config(&["no-var"], &["w101"], &[]))
            .err()
            .unwrap();
        assert_eq!(err, LintError::ConflictingRule("no-var".to_string()));

        let err = LintEngine::try_new(&config(&["E102"], &["no-async-await"], &[]))
            .err()
            .unwrap();
        assert_eq!(err, LintError::ConflictingRule("no-async-await".to_string()));
    }

    #[test]
    fn resolve_rule_by_name_or_code() {
        let engine = LintEngine::with_defaults();
        assert_eq!(engine.resolve_rule("no-var"), Some("no-var"));
        assert_eq!(engine.resolve_rule("w101"), Some("no-var"));
        assert_eq!(engine.resolve_rule(" E102 "), Some("no-async-await"));
        assert_eq!(engine.resolve_rule("no-eval"), None);
    }

    #[test]
    fn canonicalize_maps_codes_to_names() {
        let engine = LintEngine::with_defaults();
        let canonical = engine.canonicalize(&config(&["W101", "no-var"], &["e101", "no-eval"], &[]));
        assert_eq!(canonical.deny, vec!["no-var"]);
        assert_eq!(canonical.allow, vec!["no-line-comment", "no-eval"]);
        assert!(canonical.warn.is_empty());
    }

    #[test]
    fn effective_severity_defaults() {
        let engine = LintEngine::with_defaults();
        let severities: Vec<_> = engine
            .rules()
            .iter()
            .map(|r| engine.effective_severity(r.as_ref()))
            .collect();
        assert_eq!(
            severities,
            vec![
                Some(Severity::Warning),
                Some(Severity::Error),
                Some(Severity::Error)
            ]
        );
    }
}
