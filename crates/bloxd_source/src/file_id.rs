//! Opaque identifier for scripts loaded into a [`SourceDb`](crate::SourceDb).

use serde::{Deserialize, Serialize};

/// Opaque identifier for a script buffer held by the [`SourceDb`](crate::SourceDb).
///
/// Ids are handed out in load order, so sorting by `FileId` reproduces the
/// order in which the caller supplied the files.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct FileId(u32);

impl FileId {
    /// Creates a `FileId` from its load index.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the load index of this `FileId`.
    pub fn as_raw(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
