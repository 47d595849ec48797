//! # E-B Global Client Core
//!
//! Locale and currency preference core for the E-B Global marketplace
//! clients. This crate contains the preference domain state, the canonical
//! translation catalog, currency conversion and formatting, and the
//! preference service the UI surfaces consume.

pub mod domain;
pub mod i18n;
pub mod money;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{ActivePreferences, PreferenceChange};
pub use i18n::{catalog, Catalog};
pub use services::preferences::{
    DocumentLanguageSink, MemoryPreferenceStore, NoopDocumentSink, PreferenceService,
    PreferenceStore, TomlPreferenceStore,
};
