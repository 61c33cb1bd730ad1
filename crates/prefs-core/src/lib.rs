//! # prefs-core
//!
//! Shared library for the calibration preferences store containing the domain
//! value types and the JSON document codec for the preferences file.
//!
//! It performs no file I/O; reading and writing the file is the job of the
//! `prefs-store` crate.
//!
//! # Architecture overview (for beginners)
//!
//! The owning application keeps a small set of tuning values on disk: the four
//! corners of a calibrated screen or projection area ("bounds"), a fade time,
//! and four camera tuning scalars.  This crate defines:
//!
//! - **`domain`** – Pure value types with no dependencies on the file format:
//!   [`Vector2`], [`Bounds`], [`CameraSettings`] and the [`Preferences`]
//!   record holding all nine fields.
//!
//! - **`document`** – How those values look inside the JSON file.  Loading is
//!   *field tolerant*: each key is read on its own, and a missing or
//!   mistyped key is reported and skipped without affecting the others.

pub mod document;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `prefs_core::Preferences` instead of `prefs_core::domain::preferences::Preferences`.
pub use document::{
    apply_document, encode_document, parse_document, DocumentError, FieldKind, FieldReport,
    FieldStatus,
};
pub use domain::geometry::{Bounds, Vector2};
pub use domain::preferences::{keys, CameraSettings, Preferences};
