//! Application layer for the preferences store.
//!
//! Use cases here orchestrate the `prefs-core` domain types and document
//! codec against an abstract [`PreferencesStorage`] backend.  They contain no
//! direct file system access, so every behaviour can be exercised in tests
//! with the in-memory mock backend.
//!
//! [`PreferencesStorage`]: crate::infrastructure::storage::PreferencesStorage

pub mod preferences_store;
