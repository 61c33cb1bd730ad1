//! PreferencesStore: loads, exposes and persists the calibration preferences.
//!
//! # Lifecycle
//!
//! The owning entry point constructs one store with a storage backend and
//! keeps it for as long as it needs the values.  A fresh store holds
//! [`Preferences::default()`] (or the values passed to
//! [`PreferencesStore::with_preferences`]) until [`PreferencesStore::load`]
//! succeeds in parsing the file.
//!
//! ```text
//!            load() parsed            load() failed
//! Unloaded ───────────────► Loaded    Unloaded ──► Unloaded
//! ```
//!
//! `save()` may be called in either state.
//!
//! # Self-healing load
//!
//! A successful load always ends with a save.  Keys missing from the file are
//! written back with their in-memory values, so after one load/save cycle a
//! partially populated file holds all nine keys.  Keys the store does not
//! know about are not written back.
//!
//! # Persistence on mutation
//!
//! [`PreferencesStore::set_bounds`] writes the whole file synchronously on
//! every call; there is no batching.

use prefs_core::{
    apply_document, encode_document, parse_document, Bounds, CameraSettings, DocumentError,
    FieldReport, FieldStatus, Preferences,
};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::infrastructure::storage::{PreferencesStorage, StorageError};

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The stored text is not a valid preferences document, or encoding failed.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl StoreError {
    /// Returns `true` if the error means there is no preferences file yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Storage(e) if e.is_not_found())
    }
}

/// Outcome of [`PreferencesStore::load`].
///
/// Loading never fails as a whole: problems are collected here (and logged)
/// so callers can inspect them.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Set when the file could not be read or parsed.  No field was touched
    /// and no save was attempted.
    pub document_error: Option<StoreError>,
    /// One entry per known key, in file order.  Empty when `document_error` is set.
    pub fields: Vec<FieldReport>,
    /// Set when the save that follows a successful parse failed.
    pub save_error: Option<StoreError>,
}

impl LoadReport {
    /// Returns `true` if the document was parsed and applied.
    pub fn is_loaded(&self) -> bool {
        self.document_error.is_none()
    }

    /// Returns `true` if every key loaded and the file was written back.
    pub fn is_clean(&self) -> bool {
        self.is_loaded()
            && self.save_error.is_none()
            && self.fields.iter().all(|f| f.status.is_ok())
    }

    /// Returns the status recorded for `key`, if the document was applied.
    pub fn status(&self, key: &str) -> Option<FieldStatus> {
        self.fields.iter().find(|f| f.key == key).map(|f| f.status)
    }

    /// Iterates over the keys that did not load.
    pub fn problems(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields.iter().filter(|f| !f.status.is_ok())
    }
}

/// Holds the nine preference fields and persists them through `S`.
#[derive(Debug)]
pub struct PreferencesStore<S> {
    storage: S,
    prefs: Preferences,
    loaded: bool,
}

impl<S: PreferencesStorage> PreferencesStore<S> {
    /// Creates a store holding default values.  Nothing is read until [`load`](Self::load).
    pub fn new(storage: S) -> Self {
        Self::with_preferences(storage, Preferences::default())
    }

    /// Creates a store whose in-memory values start at `prefs`.
    ///
    /// These values survive for any key that is missing or invalid in the file.
    pub fn with_preferences(storage: S, prefs: Preferences) -> Self {
        Self {
            storage,
            prefs,
            loaded: false,
        }
    }

    /// Reads the preferences file and applies every valid key.
    ///
    /// On a read or parse failure the in-memory values are left untouched and
    /// nothing is written.  Otherwise each key is applied independently (see
    /// [`prefs_core::document::reader`]) and the file is saved back.
    pub fn load(&mut self) -> LoadReport {
        info!(
            "loading preferences from {}",
            self.storage.location().display()
        );

        let doc = match self
            .storage
            .read()
            .map_err(StoreError::from)
            .and_then(|text| parse_document(&text).map_err(StoreError::from))
        {
            Ok(doc) => doc,
            Err(e) => {
                error!("failed to load preferences: {e}");
                return LoadReport {
                    document_error: Some(e),
                    ..LoadReport::default()
                };
            }
        };

        let fields = apply_document(&doc, &mut self.prefs);
        self.loaded = true;

        // Writing back adds any keys the file was missing.
        let save_error = self.save().err();

        LoadReport {
            document_error: None,
            fields,
            save_error,
        }
    }

    /// Encodes all nine fields and overwrites the preferences file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the file cannot be written or
    /// [`StoreError::Document`] if encoding fails.
    pub fn save(&mut self) -> Result<(), StoreError> {
        info!("saving preferences");

        let text = encode_document(&self.prefs)?;
        self.storage.write(&text).map_err(|e| {
            error!("failed to save preferences: {e}");
            StoreError::from(e)
        })
    }

    /// Returns the four bound corners by copy.
    pub fn get_bounds(&self) -> Bounds {
        self.prefs.bounds()
    }

    /// Replaces all four bound corners and saves immediately.
    ///
    /// The in-memory values are updated even if the save fails.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`save`](Self::save).
    pub fn set_bounds(&mut self, bounds: Bounds) -> Result<(), StoreError> {
        info!("preferences: bounds set");
        debug!(" - boundsTopLeft = {}", bounds.top_left);
        debug!(" - boundsTopRight = {}", bounds.top_right);
        debug!(" - boundsBottomRight = {}", bounds.bottom_right);
        debug!(" - boundsBottomLeft = {}", bounds.bottom_left);

        self.prefs.set_bounds(bounds);
        self.save()
    }

    /// Returns the fade duration in milliseconds.
    pub fn total_fade_time_ms(&self) -> f32 {
        self.prefs.total_fade_time_ms
    }

    /// Returns the camera tuning scalars by copy.
    pub fn camera(&self) -> CameraSettings {
        self.prefs.camera()
    }

    /// Returns all current values.
    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Returns `true` once a load has parsed the file.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Returns the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store and returns the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
