//! prefs-store library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # Layers
//!
//! ```text
//! main.rs (CLI)
//!  └─ application::preferences_store   PreferencesStore: load / save / bounds
//!       └─ infrastructure::storage      PreferencesStorage trait
//!            ├─ file::FileStorage       prefs.txt on disk
//!            └─ mock::MockStorage       in-memory, for tests
//! ```
//!
//! The domain values and the JSON codec live in the `prefs-core` crate.

pub mod application;
pub mod infrastructure;

pub use application::preferences_store::{LoadReport, PreferencesStore, StoreError};
pub use infrastructure::storage::{
    file::FileStorage, mock::MockStorage, PreferencesStorage, StorageError,
};
