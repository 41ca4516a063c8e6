//! `bloxd normalize` — convert third-party lint output into canonical diagnostics.

use std::io::Read;

use bloxd_diagnostics::{normalize_batch, CanonicalDiagnostic};
use tracing::debug;

use crate::NormalizeArgs;

/// Runs the `bloxd normalize` command.
///
/// Reads one JSON lint result or an array of them and prints the canonical
/// records as a JSON array on stdout. Entries that are not objects are dropped.
pub fn run(args: &NormalizeArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let input = match args.input {
        Some(ref path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let normalized = normalize_json(&input)?;
    println!("{}", serde_json::to_string_pretty(&normalized)?);
    Ok(0)
}

/// Parses `input` as JSON and normalizes every lint result in it.
fn normalize_json(input: &str) -> Result<Vec<CanonicalDiagnostic>, serde_json::Error> {
    let raw: serde_json::Value = serde_json::from_str(input)?;
    let normalized = normalize_batch(&raw);
    debug!(count = normalized.len(), "normalized lint results");
    Ok(normalized)
}
