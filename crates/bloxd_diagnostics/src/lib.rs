//! Diagnostic records, severity canonicalization, and rendering.
//!
//! This crate provides the [`Diagnostic`] produced by the Bloxd scanner, the
//! [`normalize`] adapter that turns loosely-shaped lint results from any
//! producer into a [`CanonicalDiagnostic`], and [`DiagnosticRenderer`]
//! implementations for terminal output.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod normalize;
pub mod renderer;
pub mod severity;

pub use code::{Category, DiagnosticCode, ParseCodeError};
pub use diagnostic::{Diagnostic, SOURCE};
pub use normalize::{normalize, normalize_batch, CanonicalDiagnostic};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
