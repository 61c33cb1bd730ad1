//! Domain entities for the preferences store.
//!
//! This module contains plain value types with no knowledge of JSON, files or
//! logging.  Code in outer layers (document codec, storage, CLI) depends on
//! the domain, but the domain never depends on them, so it can be unit-tested
//! in isolation.

/// 2D points and the bounds quadrilateral.
pub mod geometry;

/// The nine persisted preference fields.
pub mod preferences;
