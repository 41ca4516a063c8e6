//! All built-in lint rule implementations.
//!
//! This module re-exports the individual rule types and provides
//! `register_builtin_rules` to add them to a `LintEngine` in evaluation order.

mod e101;
mod e102;
mod w101;

pub use e101::NoLineComment;
pub use e102::NoAsyncAwait;
pub use w101::NoVar;

use crate::LintEngine;

/// Registers the three built-in rules with the engine.
///
/// Registration order is evaluation order: W101, E101, E102.
pub fn register_builtin_rules(engine: &mut LintEngine) {
    engine.register(Box::new(NoVar));
    engine.register(Box::new(NoLineComment));
    engine.register(Box::new(NoAsyncAwait));
}
