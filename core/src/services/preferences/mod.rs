//! Preference resolution, persistence and propagation
//!
//! The service here is the owned context object handed to the UI tree root:
//! it resolves the initial language and currency once per session, exposes
//! translation and price formatting to every surface, and propagates setter
//! effects synchronously.

pub mod document;
pub mod service;
pub mod store;

pub use document::{DocumentLanguageSink, NoopDocumentSink};
pub use service::PreferenceService;
pub use store::{
    MemoryPreferenceStore, PreferenceStore, TomlPreferenceStore, CURRENCY_KEY, LANGUAGE_KEY,
};
