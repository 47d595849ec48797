//! Type definitions for display preferences
//!
//! - `language` - Supported display languages and tag parsing
//! - `currency` - Supported display currencies, exchange rates and country seeding

pub mod currency;
pub mod language;

// Re-export commonly used types at module level
pub use currency::Currency;
pub use language::Language;
