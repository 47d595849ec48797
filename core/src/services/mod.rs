//! Services for the client preference layer

pub mod preferences;

// Re-export commonly used types
pub use preferences::{PreferenceService, PreferenceStore};
