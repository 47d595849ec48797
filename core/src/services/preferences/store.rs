//! Persisted preference store abstraction and implementations

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use eb_shared::StoreError;

/// Store key for the persisted language tag
pub const LANGUAGE_KEY: &str = "language";

/// Store key for the persisted currency tag
pub const CURRENCY_KEY: &str = "currency";

/// A small key-value store for display preferences
///
/// Values are raw tag strings with no schema versioning. Implementations may
/// fail; the preference service treats a failed read as an absent value and
/// keeps its in-memory state when a write fails.
pub trait PreferenceStore {
    /// Read a stored value, `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store persisting preferences as a flat TOML document
///
/// The whole document is read once on open and rewritten on every set; with
/// two keys and one writer that is cheap and keeps the on-disk copy a plain
/// `language = "pt"` style file a support engineer can edit by hand.
#[derive(Debug)]
pub struct TomlPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlPreferenceStore {
    /// Open a store at `path`, loading any existing document
    ///
    /// A missing file is an empty store; a present but unparsable file is a
    /// `Malformed` error so a corrupt document is surfaced at startup rather
    /// than silently truncated.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| StoreError::Malformed(e.to_string()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let content = toml::to_string(&self.values)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("eb-prefs-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryPreferenceStore::new();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap(), None);

        store.set(LANGUAGE_KEY, "pt").unwrap();
        store.set(CURRENCY_KEY, "AOA").unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("pt"));
        assert_eq!(store.get(CURRENCY_KEY).unwrap().as_deref(), Some("AOA"));

        store.set(LANGUAGE_KEY, "en").unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn test_toml_store_persists_across_opens() {
        let path = temp_path("reopen");
        let _ = fs::remove_file(&path);

        {
            let mut store = TomlPreferenceStore::open(&path).unwrap();
            assert_eq!(store.get(LANGUAGE_KEY).unwrap(), None);
            store.set(LANGUAGE_KEY, "pt").unwrap();
            store.set(CURRENCY_KEY, "AOA").unwrap();
        }

        let store = TomlPreferenceStore::open(&path).unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("pt"));
        assert_eq!(store.get(CURRENCY_KEY).unwrap().as_deref(), Some("AOA"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_toml_store_rejects_corrupt_document() {
        let path = temp_path("corrupt");
        fs::write(&path, "language = [not toml").unwrap();

        assert!(matches!(
            TomlPreferenceStore::open(&path),
            Err(StoreError::Malformed(_))
        ));

        let _ = fs::remove_file(&path);
    }
}
