//! Field readers: extract one typed value from a parsed document.
//!
//! Every reader follows the same policy:
//!
//! | situation                  | destination | log     | returns                  |
//! |----------------------------|-------------|---------|--------------------------|
//! | key absent                 | unchanged   | `error` | [`FieldStatus::KeyMissing`] |
//! | key present, wrong type    | unchanged   | `error` | [`FieldStatus::WrongType`]  |
//! | key present, correct type  | assigned    | `debug` | [`FieldStatus::Ok`]         |
//!
//! A number that does not fit in `f32` (it would become infinite) counts as
//! the wrong type, so a later save never has to write a non-finite value.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use super::{json_type_name, Document, FieldKind, FieldStatus};
use crate::domain::geometry::Vector2;

/// Reads a 2D point stored as `{"x": n, "y": n}` or `[n, n]`.
pub fn read_vector2(doc: &Document, key: &str, dest: &mut Vector2) -> FieldStatus {
    let Some(value) = lookup(doc, key) else {
        return FieldStatus::KeyMissing;
    };

    match Vector2::deserialize(value) {
        Ok(point) if point.x.is_finite() && point.y.is_finite() => {
            *dest = point;
            debug!(" - {key} = {point}");
            FieldStatus::Ok
        }
        Ok(_) => wrong_type(key, FieldKind::Vector2, value, None),
        Err(e) => wrong_type(key, FieldKind::Vector2, value, Some(e)),
    }
}

/// Reads a real number.
///
/// Integer literals such as `3` are rejected; the value must be written as a
/// real (`3.0`, `3e0`).
pub fn read_float(doc: &Document, key: &str, dest: &mut f32) -> FieldStatus {
    let Some(value) = lookup(doc, key) else {
        return FieldStatus::KeyMissing;
    };

    let real = value
        .as_number()
        .filter(|n| n.is_f64())
        .and_then(|n| n.as_f64())
        .map(|v| v as f32)
        .filter(|v| v.is_finite());
    match real {
        Some(v) => {
            *dest = v;
            debug!(" - {key} = {v}");
            FieldStatus::Ok
        }
        None => wrong_type(key, FieldKind::Float, value, None),
    }
}

/// Reads an integer that fits in `i32`.
pub fn read_int(doc: &Document, key: &str, dest: &mut i32) -> FieldStatus {
    let Some(value) = lookup(doc, key) else {
        return FieldStatus::KeyMissing;
    };

    match value.as_i64().and_then(|n| i32::try_from(n).ok()) {
        Some(v) => {
            *dest = v;
            debug!(" - {key} = {v}");
            FieldStatus::Ok
        }
        None => wrong_type(key, FieldKind::Int, value, None),
    }
}

fn lookup<'a>(doc: &'a Document, key: &str) -> Option<&'a Value> {
    let value = doc.get(key);
    if value.is_none() {
        error!("preferences: '{key}' does not exist");
    }
    value
}

fn wrong_type(
    key: &str,
    expected: FieldKind,
    found: &Value,
    cause: Option<serde_json::Error>,
) -> FieldStatus {
    match cause {
        Some(e) => error!(
            "preferences: '{key}' is not {expected} (found {}: {e})",
            json_type_name(found)
        ),
        None => error!(
            "preferences: '{key}' is not {expected} (found {})",
            json_type_name(found)
        ),
    }
    FieldStatus::WrongType(expected)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
