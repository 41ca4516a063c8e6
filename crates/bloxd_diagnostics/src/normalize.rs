//! Normalization of loosely-shaped lint results into canonical diagnostics.
//!
//! Lint producers disagree on field names: the message may be `message`,
//! `msg`, `text` or `description`; positions may come as a `range` object, a
//! `[start, end]` pair, or flat `line`/`column` style fields. [`normalize`]
//! accepts all of them and always yields a record with every range field set
//! and every coordinate `>= 1`. It never fails on malformed input; missing or
//! unusable fields degrade to defaults (line 1, column 1, `Info`).

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use bloxd_source::LineRange;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

/// Message used when a record carries none.
pub const DEFAULT_MESSAGE: &str = "Linter issue";

/// Source tag used when a record names no producer.
pub const DEFAULT_SOURCE: &str = "linter";

const MESSAGE_KEYS: &[&str] = &["message", "msg", "text", "description"];
const SEVERITY_KEYS: &[&str] = &["severity", "level", "type"];
const SOURCE_KEYS: &[&str] = &["source", "ruleId", "code"];
const START_LINE_KEYS: &[&str] = &["startLine", "line", "ln"];
const START_COLUMN_KEYS: &[&str] = &["startColumn", "column", "col"];
const END_LINE_KEYS: &[&str] = &["endLine", "endLineNumber", "el"];
const END_COLUMN_KEYS: &[&str] = &["endColumn", "endColumnNumber", "ec"];
const POSITION_LINE_KEYS: &[&str] = &["line", "lineNumber", "ln"];
const POSITION_COLUMN_KEYS: &[&str] = &["column", "col"];

/// A diagnostic with every field resolved, ready to become an editor marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalDiagnostic {
    /// The resolved range; every coordinate is at least 1.
    #[serde(flatten)]
    pub range: LineRange,
    /// The message, never empty.
    pub message: String,
    /// The canonical severity.
    pub severity: Severity,
    /// The producing rule engine.
    pub source: String,
}

impl From<&Diagnostic> for CanonicalDiagnostic {
    fn from(diag: &Diagnostic) -> Self {
        Self {
            range: diag.range.clamped(),
            message: diag.message.clone(),
            severity: diag.severity,
            source: diag.source.clone(),
        }
    }
}

/// Normalizes a single raw lint result.
///
/// Returns `None` when `raw` is absent, JSON `null`, or not an object.
pub fn normalize(raw: Option<&Value>) -> Option<CanonicalDiagnostic> {
    let obj = raw?.as_object()?;

    let message = first_text(obj, MESSAGE_KEYS).unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
    let severity = resolve_severity(obj);
    let source = first_label(obj, SOURCE_KEYS).unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    let (mut start_line, mut start_col, mut end_line, mut end_col) = range_fields(obj.get("range"));

    start_line = start_line.or_else(|| first_position(obj, START_LINE_KEYS));
    start_col = start_col.or_else(|| first_position(obj, START_COLUMN_KEYS));
    end_line = end_line
        .or_else(|| first_position(obj, END_LINE_KEYS))
        .or(start_line);
    end_col = end_col
        .or_else(|| first_position(obj, END_COLUMN_KEYS))
        .or(start_col.map(|c| c + 1));

    let start_line = start_line.unwrap_or(1);
    let start_col = start_col.unwrap_or(1);
    let end_line = end_line.unwrap_or(start_line);
    let end_col = end_col.unwrap_or(start_col + 1);

    Some(CanonicalDiagnostic {
        range: LineRange::new(
            to_coordinate(start_line),
            to_coordinate(start_col),
            to_coordinate(end_line),
            to_coordinate(end_col),
        ),
        message,
        severity,
        source,
    })
}

/// Normalizes a batch of raw lint results.
///
/// An array is normalized element by element, dropping unrecognizable
/// entries; a single object is treated as a one-element batch; anything else
/// yields no diagnostics.
pub fn normalize_batch(raw: &Value) -> Vec<CanonicalDiagnostic> {
    match raw {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                let normalized = normalize(Some(item));
                if normalized.is_none() {
                    trace!(?item, "dropping unrecognizable lint result");
                }
                normalized
            })
            .collect(),
        Value::Object(_) => normalize(Some(raw)).into_iter().collect(),
        other => {
            trace!(?other, "lint results are neither an array nor an object");
            Vec::new()
        }
    }
}

fn resolve_severity(obj: &Map<String, Value>) -> Severity {
    let value = SEVERITY_KEYS
        .iter()
        .filter_map(|key| obj.get(*key))
        .find(|v| is_present(v));
    match value {
        Some(Value::String(s)) => Severity::from_alias(s).unwrap_or(Severity::Info),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(Severity::from_marker_code)
            .unwrap_or(Severity::Info),
        _ => Severity::Info,
    }
}

type RangeFields = (Option<i64>, Option<i64>, Option<i64>, Option<i64>);

/// Positions from a `range` field.
///
/// Only the `[start, end]` pair form lets the end line fall back to the start
/// line here; for the object form a missing end line is left to the flat
/// `endLine` aliases.
fn range_fields(range: Option<&Value>) -> RangeFields {
    match range {
        Some(Value::Array(pair)) if pair.len() >= 2 => {
            let (start, end) = (&pair[0], &pair[1]);
            let start_line = position_line(start);
            (
                start_line,
                position_column(start),
                position_line(end).or(start_line),
                position_column(end),
            )
        }
        Some(Value::Object(obj)) => match (obj.get("start"), obj.get("end")) {
            (Some(start), Some(end)) if is_present(start) && is_present(end) => (
                position_line(start),
                position_column(start),
                position_line(end),
                position_column(end),
            ),
            _ => (None, None, None, None),
        },
        _ => (None, None, None, None),
    }
}

fn position_line(pos: &Value) -> Option<i64> {
    match pos {
        Value::Array(pair) => pair.first().and_then(as_position),
        Value::Object(obj) => first_position(obj, POSITION_LINE_KEYS),
        _ => None,
    }
}

fn position_column(pos: &Value) -> Option<i64> {
    match pos {
        Value::Array(pair) => pair.get(1).and_then(as_position),
        Value::Object(obj) => first_position(obj, POSITION_COLUMN_KEYS),
        _ => None,
    }
}

/// First key holding a usable coordinate. Zero counts as absent.
fn first_position(obj: &Map<String, Value>, keys: &[&str]) -> Option<i64> {
    keys.iter().find_map(|key| obj.get(*key).and_then(as_position))
}

fn as_position(value: &Value) -> Option<i64> {
    let n = value.as_f64()?;
    if !n.is_finite() || n.trunc() == 0.0 {
        return None;
    }
    Some(n.trunc().clamp(i64::MIN as f64, i64::MAX as f64) as i64)
}

fn to_coordinate(value: i64) -> u32 {
    value.clamp(1, u32::MAX as i64) as u32
}

fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match obj.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    })
}

fn first_label(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match obj.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
