//! Environment configuration for the client preference layer
//!
//! - `locale` - Detection and parsing of the environment locale signal

pub mod locale;

// Re-export commonly used types
pub use locale::{LocaleTag, SystemLocale};
