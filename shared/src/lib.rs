//! Shared utilities and common types for the E-B Global client core
//!
//! This crate provides common functionality used by the preference layer:
//! - Language and currency tag types
//! - Environment locale detection
//! - Deterministic number formatting for monetary display
//! - Error types for the persisted preference store

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{LocaleTag, SystemLocale};
pub use errors::StoreError;
pub use types::{Currency, Language};
