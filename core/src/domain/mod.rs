//! Domain state for the preference layer

pub mod preferences;

// Re-export commonly used types
pub use preferences::{resolve_currency, resolve_language, ActivePreferences, PreferenceChange};
