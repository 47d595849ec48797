//! Translation catalog for the client surfaces
//!
//! The canonical key set lives in `i18n/catalog.toml` and is embedded at
//! compile time. A file of the same relative path overrides the embedded
//! copy at startup so copy fixes can ship without a rebuild. English is the
//! fallback locale: deserialization requires an English value per entry,
//! which is what guarantees `translate` is total for every canonical key.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use eb_shared::Language;

/// A single catalog entry
///
/// `en` is mandatory; `pt` falls back to English when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub en: String,
    #[serde(default)]
    pub pt: Option<String>,
}

impl Entry {
    fn text(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Portuguese => self.pt.as_deref().unwrap_or(&self.en),
        }
    }
}

/// Translation catalog grouped by UI namespace
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub navigation: HashMap<String, Entry>,
    pub hero: HashMap<String, Entry>,
    pub services: HashMap<String, Entry>,
    pub booking: HashMap<String, Entry>,
    pub dashboard: HashMap<String, Entry>,
    pub admin: HashMap<String, Entry>,
    pub auth: HashMap<String, Entry>,
    pub common: HashMap<String, Entry>,
    pub footer: HashMap<String, Entry>,
    pub currency: HashMap<String, Entry>,
}

/// Errors raised while loading or verifying the catalog
///
/// These only occur at startup; lookups themselves never fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("catalog entry `{0}` has an empty English value")]
    EmptyFallback(String),
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    load_catalog().expect("Failed to load translation catalog")
});

/// Process-wide immutable catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

fn load_catalog() -> Result<Catalog, CatalogError> {
    // Try to load from file first, fallback to the embedded copy
    let config_path = Path::new("i18n/catalog.toml");

    let catalog: Catalog = if config_path.exists() {
        toml::from_str(&fs::read_to_string(config_path)?)?
    } else {
        toml::from_str(include_str!("../../i18n/catalog.toml"))?
    };
    catalog.verify()?;
    Ok(catalog)
}

impl Catalog {
    /// Parse a catalog from TOML text and verify completeness
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(text)?;
        catalog.verify()?;
        Ok(catalog)
    }

    /// Look up a dotted key (`auth.email`) under `language`
    ///
    /// Total: an entry missing a translation for the active language falls
    /// back to English, and an unknown key comes back verbatim. A gap in the
    /// catalog must never blank a screen.
    pub fn translate<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        let Some((namespace, rest)) = key.split_once('.') else {
            return key;
        };
        match self.namespace(namespace).and_then(|map| map.get(rest)) {
            Some(entry) => entry.text(language),
            None => {
                tracing::debug!(key, "translation key missing from catalog");
                key
            }
        }
    }

    /// Startup completeness check against the fallback locale
    pub fn verify(&self) -> Result<(), CatalogError> {
        for (namespace, entries) in self.namespaces() {
            for (key, entry) in entries {
                if entry.en.trim().is_empty() {
                    return Err(CatalogError::EmptyFallback(format!("{namespace}.{key}")));
                }
            }
        }
        Ok(())
    }

    /// Number of keys in the canonical (English) set
    pub fn key_count(&self) -> usize {
        self.namespaces().iter().map(|(_, map)| map.len()).sum()
    }

    fn namespace(&self, name: &str) -> Option<&HashMap<String, Entry>> {
        match name {
            "navigation" => Some(&self.navigation),
            "hero" => Some(&self.hero),
            "services" => Some(&self.services),
            "booking" => Some(&self.booking),
            "dashboard" => Some(&self.dashboard),
            "admin" => Some(&self.admin),
            "auth" => Some(&self.auth),
            "common" => Some(&self.common),
            "footer" => Some(&self.footer),
            "currency" => Some(&self.currency),
            _ => None,
        }
    }

    fn namespaces(&self) -> [(&'static str, &HashMap<String, Entry>); 10] {
        [
            ("navigation", &self.navigation),
            ("hero", &self.hero),
            ("services", &self.services),
            ("booking", &self.booking),
            ("dashboard", &self.dashboard),
            ("admin", &self.admin),
            ("auth", &self.auth),
            ("common", &self.common),
            ("footer", &self.footer),
            ("currency", &self.currency),
        ]
    }
}

/// Substitute `{name}` placeholders in a catalog value
pub fn format_message(template: &str, params: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (name, value) in params {
        result = result.replace(&format!("{{{}}}", name), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [auth.email]
        en = "Email"
        pt = "Email"

        [auth.password]
        en = "Password"
        pt = "Palavra-passe"

        [auth.untranslated]
        en = "Only in English"

        [navigation.home]
        en = "Home"
        pt = "Início"

        [hero.empty]
        en = "x"
        [services.empty]
        en = "x"
        [booking.empty]
        en = "x"
        [dashboard.empty]
        en = "x"
        [admin.empty]
        en = "x"
        [common.empty]
        en = "x"
        [footer.empty]
        en = "x"
        [currency.empty]
        en = "x"
    "#;

    #[test]
    fn test_translate_hits_active_language() {
        let catalog = Catalog::from_toml(SAMPLE).unwrap();
        assert_eq!(
            catalog.translate(Language::Portuguese, "auth.password"),
            "Palavra-passe"
        );
        assert_eq!(catalog.translate(Language::English, "auth.password"), "Password");
    }

    #[test]
    fn test_translate_falls_back_to_english() {
        let catalog = Catalog::from_toml(SAMPLE).unwrap();
        assert_eq!(
            catalog.translate(Language::Portuguese, "auth.untranslated"),
            "Only in English"
        );
    }

    #[test]
    fn test_translate_unknown_key_returns_key() {
        let catalog = Catalog::from_toml(SAMPLE).unwrap();
        assert_eq!(
            catalog.translate(Language::English, "nonexistent.key"),
            "nonexistent.key"
        );
        assert_eq!(
            catalog.translate(Language::Portuguese, "auth.missing"),
            "auth.missing"
        );
    }

    #[test]
    fn test_translate_undotted_key_returns_key() {
        let catalog = Catalog::from_toml(SAMPLE).unwrap();
        assert_eq!(catalog.translate(Language::English, "plainkey"), "plainkey");
    }

    #[test]
    fn test_verify_rejects_empty_english_value() {
        let broken = SAMPLE.replace("en = \"Home\"", "en = \"  \"");
        match Catalog::from_toml(&broken) {
            Err(CatalogError::EmptyFallback(key)) => assert_eq!(key, "navigation.home"),
            other => panic!("expected EmptyFallback, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_missing_english_value_fails_parse() {
        // Dropping an `en` value is caught by deserialization itself
        let broken = SAMPLE.replace("en = \"Email\"", "");
        assert!(matches!(Catalog::from_toml(&broken), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_format_message_substitutes_params() {
        let mut params = HashMap::new();
        params.insert("name", "Amara".to_string());
        assert_eq!(
            format_message("Welcome back, {name}!", &params),
            "Welcome back, Amara!"
        );
    }

    #[test]
    fn test_format_message_leaves_unknown_placeholders() {
        let params = HashMap::new();
        assert_eq!(format_message("Hi {name}", &params), "Hi {name}");
    }
}
