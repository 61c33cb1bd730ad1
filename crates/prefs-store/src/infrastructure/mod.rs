//! Infrastructure layer for the preferences store.
//!
//! Contains the file-system adapter and its in-memory test double.
//!
//! **Dependency rule**: this layer may be used by `application` only through
//! the [`storage::PreferencesStorage`] trait.

pub mod storage;
