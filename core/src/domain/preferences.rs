//! Preference resolution policy
//!
//! Pure precedence rules for the one-shot startup resolution: a persisted
//! value wins over the environment locale signal, which wins over the
//! hard-coded default. Each rule that fails to produce a supported tag
//! falls through silently to the next one.

use eb_shared::{Currency, Language, LocaleTag};

/// The resolved per-session display preferences
///
/// Both fields transition out of "unresolved" exactly once per session, at
/// construction; afterwards they change only through explicit setter calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivePreferences {
    pub language: Language,
    pub currency: Currency,
}

impl ActivePreferences {
    /// Run the startup resolution against the persisted tags and the
    /// environment locale signal
    pub fn resolve(
        persisted_language: Option<&str>,
        persisted_currency: Option<&str>,
        env: Option<&LocaleTag>,
    ) -> Self {
        Self {
            language: resolve_language(persisted_language, env),
            currency: resolve_currency(persisted_currency, env),
        }
    }
}

/// Precedence: persisted tag, then environment language subtag, then English
pub fn resolve_language(persisted: Option<&str>, env: Option<&LocaleTag>) -> Language {
    if let Some(tag) = persisted {
        match tag.parse::<Language>() {
            Ok(language) => return language,
            Err(_) => {
                tracing::debug!(tag, "persisted language outside supported set, ignoring")
            }
        }
    }
    if let Some(env) = env {
        if let Some(language) = Language::from_locale_tag(&env.language) {
            return language;
        }
    }
    Language::default()
}

/// Precedence: persisted tag, then country seeding from the environment
/// region subtag, then the reference currency
pub fn resolve_currency(persisted: Option<&str>, env: Option<&LocaleTag>) -> Currency {
    if let Some(tag) = persisted {
        match tag.parse::<Currency>() {
            Ok(currency) => return currency,
            Err(_) => {
                tracing::debug!(tag, "persisted currency outside supported set, ignoring")
            }
        }
    }
    if let Some(region) = env.and_then(|e| e.region.as_deref()) {
        if let Some(currency) = Currency::for_country(region) {
            return currency;
        }
    }
    Currency::default()
}

/// Emitted to subscribers after a setter commits a change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    LanguageChanged(Language),
    CurrencyChanged(Currency),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(language: &str, region: Option<&str>) -> LocaleTag {
        LocaleTag {
            language: language.to_string(),
            region: region.map(str::to_string),
        }
    }

    #[test]
    fn test_persisted_language_wins() {
        let signal = env("pt", Some("AO"));
        assert_eq!(
            resolve_language(Some("en"), Some(&signal)),
            Language::English
        );
    }

    #[test]
    fn test_invalid_persisted_language_falls_through_to_environment() {
        let signal = env("pt", Some("AO"));
        assert_eq!(
            resolve_language(Some("fr"), Some(&signal)),
            Language::Portuguese
        );
    }

    #[test]
    fn test_unsupported_environment_language_falls_through_to_default() {
        let signal = env("fr", Some("FR"));
        assert_eq!(resolve_language(None, Some(&signal)), Language::English);
    }

    #[test]
    fn test_language_defaults_without_any_signal() {
        assert_eq!(resolve_language(None, None), Language::English);
    }

    #[test]
    fn test_persisted_currency_wins() {
        let signal = env("pt", Some("AO"));
        assert_eq!(
            resolve_currency(Some("EUR"), Some(&signal)),
            Currency::Eur
        );
    }

    #[test]
    fn test_currency_seeded_from_environment_region() {
        let signal = env("pt", Some("AO"));
        assert_eq!(resolve_currency(None, Some(&signal)), Currency::Aoa);
    }

    #[test]
    fn test_unknown_region_falls_through_to_reference() {
        let signal = env("en", Some("FR"));
        assert_eq!(resolve_currency(None, Some(&signal)), Currency::Usd);
    }

    #[test]
    fn test_currency_defaults_without_region() {
        let signal = env("pt", None);
        assert_eq!(resolve_currency(None, Some(&signal)), Currency::Usd);
        assert_eq!(resolve_currency(None, None), Currency::Usd);
    }

    #[test]
    fn test_full_resolution_for_angola_signal() {
        let signal = env("pt", Some("AO"));
        let resolved = ActivePreferences::resolve(None, None, Some(&signal));
        assert_eq!(resolved.language, Language::Portuguese);
        assert_eq!(resolved.currency, Currency::Aoa);
    }
}
