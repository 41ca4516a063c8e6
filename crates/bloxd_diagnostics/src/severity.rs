//! Canonical severity levels and the aliases lint producers use for them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The canonical severity of a diagnostic.
///
/// Ordered from least severe (`Hint`) to most severe (`Error`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A suggestion that does not indicate a problem.
    #[serde(alias = "note")]
    Hint,
    /// Informational context.
    #[serde(alias = "information")]
    Info,
    /// A construct that works but should be avoided.
    #[serde(alias = "warn")]
    Warning,
    /// A construct the Bloxd runtime rejects.
    #[serde(alias = "err")]
    Error,
}

impl Severity {
    /// Returns `true` if this severity is [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }

    /// Maps a severity name to its canonical level, ignoring ASCII case.
    ///
    /// Accepts `error`/`err`, `warning`/`warn`, `info`/`information`, and
    /// `note`/`hint`. Returns `None` for anything else.
    pub fn from_alias(name: &str) -> Option<Severity> {
        match name.trim().to_ascii_lowercase().as_str() {
            "error" | "err" => Some(Severity::Error),
            "warning" | "warn" => Some(Severity::Warning),
            "info" | "information" => Some(Severity::Info),
            "note" | "hint" => Some(Severity::Hint),
            _ => None,
        }
    }

    /// Maps an editor marker severity code (8, 4, 2, 1) to its level.
    pub fn from_marker_code(code: i64) -> Option<Severity> {
        match code {
            8 => Some(Severity::Error),
            4 => Some(Severity::Warning),
            2 => Some(Severity::Info),
            1 => Some(Severity::Hint),
            _ => None,
        }
    }

    /// Returns the editor marker severity code for this level.
    pub fn marker_code(self) -> u8 {
        match self {
            Severity::Hint => 1,
            Severity::Info => 2,
            Severity::Warning => 4,
            Severity::Error => 8,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}
