//! Errors raised while configuring the lint engine.

/// Errors that can occur when applying a lint configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LintError {
    /// A configuration entry names no registered rule.
    #[error("unknown lint rule '{0}'")]
    UnknownRule(String),

    /// A rule is listed under both `deny` and `allow`.
    #[error("lint rule '{0}' is both denied and allowed")]
    ConflictingRule(String),
}
