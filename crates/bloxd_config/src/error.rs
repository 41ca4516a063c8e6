//! Errors raised while reading a project's `bloxd.toml`.

use std::io;
use std::path::PathBuf;

/// Why a `bloxd.toml` could not be turned into a [`ProjectConfig`](crate::ProjectConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `bloxd.toml` was found but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        /// Path of the `bloxd.toml` that failed.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// The file is not TOML, or its tables do not have the expected shape.
    #[error("malformed bloxd.toml: {0}")]
    Malformed(String),

    /// A `[project]` key that must be set is absent or blank.
    #[error("bloxd.toml: [project] needs a non-empty `{0}`")]
    MissingKey(&'static str),

    /// Settings that parse but contradict each other.
    #[error("bloxd.toml: {0}")]
    Invalid(String),
}
