//! JSON document codec for the preferences file.
//!
//! # Load policy (for beginners)
//!
//! Loading happens in two steps with two tiers of failure:
//!
//! 1. [`parse_document`] turns the file text into a JSON object.  If the text
//!    is not valid JSON, or the top-level value is not an object, the whole
//!    document is rejected with a [`DocumentError`] and nothing is applied.
//! 2. [`apply_document`] reads each of the nine known keys independently with
//!    the field readers in [`reader`].  A missing or mistyped key produces a
//!    [`FieldStatus`] other than `Ok` for that key only; the destination field
//!    keeps whatever value it had, and the remaining keys are still read.
//!
//! Keys the store does not know about are ignored.
//!
//! # Save format
//!
//! [`encode_document`] writes all nine keys in a fixed order, points as
//! `{"x": .., "y": ..}` objects and scalars as JSON numbers, pretty-printed
//! with a trailing newline.  The output depends only on the values, so saving
//! the same preferences twice produces identical bytes.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::preferences::{keys, Preferences};

pub mod reader;

pub use reader::{read_float, read_int, read_vector2};

/// A parsed preferences document: the top-level JSON object.
pub type Document = Map<String, Value>;

/// Error type for whole-document operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text is not valid JSON.
    #[error("error on line {}:{}", .0.line(), .0)]
    Parse(#[source] serde_json::Error),

    /// The text is valid JSON but the top-level value is not an object.
    #[error("top-level value is {0}, expected an object")]
    NotAnObject(&'static str),

    /// The preferences could not be serialised.
    ///
    /// Not produced for [`Preferences`] today, whose fields are all `f32`;
    /// kept so `encode_document` does not panic if the record grows.
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// The value type a field reader expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A 2D point: `{"x": n, "y": n}` or `[n, n]`.
    Vector2,
    /// A real number (written with a fraction or exponent).
    Float,
    /// An integer that fits in `i32`.
    Int,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Vector2 => write!(f, "a vector2"),
            FieldKind::Float => write!(f, "a float"),
            FieldKind::Int => write!(f, "an integer"),
        }
    }
}

/// Outcome of reading a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// The key was present and well typed; the destination was updated.
    Ok,
    /// The key was absent; the destination is unchanged.
    KeyMissing,
    /// The key was present with a value of the wrong type; the destination is unchanged.
    WrongType(FieldKind),
}

impl FieldStatus {
    /// Returns `true` if the destination was updated.
    pub fn is_ok(&self) -> bool {
        matches!(self, FieldStatus::Ok)
    }
}

/// Per-key result of [`apply_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldReport {
    pub key: &'static str,
    pub status: FieldStatus,
}

/// Parses preferences file text into a top-level JSON object.
///
/// # Errors
///
/// Returns [`DocumentError::Parse`] for malformed JSON and
/// [`DocumentError::NotAnObject`] when the top-level value is an array,
/// string, number, boolean or null.
pub fn parse_document(text: &str) -> Result<Document, DocumentError> {
    let value: Value = serde_json::from_str(text).map_err(DocumentError::Parse)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DocumentError::NotAnObject(json_type_name(&other))),
    }
}

/// Reads every known key from `doc` into `prefs`.
///
/// Returns one [`FieldReport`] per key in [`keys::ALL`] order.
pub fn apply_document(doc: &Document, prefs: &mut Preferences) -> Vec<FieldReport> {
    let mut reports = Vec::with_capacity(keys::ALL.len());
    let mut record = |key: &'static str, status: FieldStatus| {
        reports.push(FieldReport { key, status });
    };

    record(
        keys::BOUNDS_TOP_LEFT,
        read_vector2(doc, keys::BOUNDS_TOP_LEFT, &mut prefs.bounds_top_left),
    );
    record(
        keys::BOUNDS_TOP_RIGHT,
        read_vector2(doc, keys::BOUNDS_TOP_RIGHT, &mut prefs.bounds_top_right),
    );
    record(
        keys::BOUNDS_BOTTOM_RIGHT,
        read_vector2(doc, keys::BOUNDS_BOTTOM_RIGHT, &mut prefs.bounds_bottom_right),
    );
    record(
        keys::BOUNDS_BOTTOM_LEFT,
        read_vector2(doc, keys::BOUNDS_BOTTOM_LEFT, &mut prefs.bounds_bottom_left),
    );

    record(
        keys::TOTAL_FADE_TIME_MS,
        read_float(doc, keys::TOTAL_FADE_TIME_MS, &mut prefs.total_fade_time_ms),
    );

    record(
        keys::CAM_BRIGHTNESS,
        read_float(doc, keys::CAM_BRIGHTNESS, &mut prefs.cam_brightness),
    );
    record(
        keys::CAM_CONTRAST,
        read_float(doc, keys::CAM_CONTRAST, &mut prefs.cam_contrast),
    );
    record(
        keys::CAM_SATURATION,
        read_float(doc, keys::CAM_SATURATION, &mut prefs.cam_saturation),
    );
    record(keys::CAM_GAIN, read_float(doc, keys::CAM_GAIN, &mut prefs.cam_gain));

    reports
}

/// Serialises all nine fields to the canonical file text.
///
/// # Errors
///
/// Returns [`DocumentError::Serialize`] if serialisation fails.
pub fn encode_document(prefs: &Preferences) -> Result<String, DocumentError> {
    let mut text = serde_json::to_string_pretty(prefs).map_err(DocumentError::Serialize)?;
    text.push('\n');
    Ok(text)
}

/// Human-readable JSON type name used in error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
