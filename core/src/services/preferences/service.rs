//! The session-scoped preference service

use std::collections::HashMap;

use eb_shared::{Currency, Language, LocaleTag};

use crate::domain::{ActivePreferences, PreferenceChange};
use crate::i18n::{catalog, format_message};
use crate::money;

use super::document::{DocumentLanguageSink, NoopDocumentSink};
use super::store::{PreferenceStore, CURRENCY_KEY, LANGUAGE_KEY};

type Subscriber = Box<dyn Fn(PreferenceChange)>;

/// Owned locale and currency context for one application session
///
/// Constructed once at startup and handed to the UI tree root; every surface
/// reads translations and prices through it and the selector controls call
/// the setters. All operations are synchronous and non-throwing: a setter's
/// effects (state update, persistence, document annotation, subscriber
/// notification) are complete before it returns, so no consumer can observe
/// stale state after a mutation.
pub struct PreferenceService<S, D = NoopDocumentSink>
where
    S: PreferenceStore,
    D: DocumentLanguageSink,
{
    /// Resolved display preferences
    state: ActivePreferences,
    /// Persisted preference store, exclusively owned by this context
    store: S,
    /// Document-level language attribute sink
    document: D,
    /// Synchronous change listeners, notified in subscription order
    subscribers: Vec<Subscriber>,
}

impl<S: PreferenceStore> PreferenceService<S> {
    /// Resolve initial preferences for an environment without a document
    pub fn initialize(store: S, env: Option<LocaleTag>) -> Self {
        Self::initialize_with_document(store, NoopDocumentSink, env)
    }
}

impl<S, D> PreferenceService<S, D>
where
    S: PreferenceStore,
    D: DocumentLanguageSink,
{
    /// One-shot startup resolution
    ///
    /// Precedence per preference: persisted value, then the environment
    /// locale signal, then the hard-coded default. Store read failures are
    /// treated as absent values; this constructor never fails.
    pub fn initialize_with_document(store: S, mut document: D, env: Option<LocaleTag>) -> Self {
        let persisted_language = read_persisted(&store, LANGUAGE_KEY);
        let persisted_currency = read_persisted(&store, CURRENCY_KEY);

        let state = ActivePreferences::resolve(
            persisted_language.as_deref(),
            persisted_currency.as_deref(),
            env.as_ref(),
        );
        tracing::debug!(
            language = state.language.code(),
            currency = state.currency.code(),
            "resolved session preferences"
        );
        document.apply_language(state.language);

        Self {
            state,
            store,
            document,
            subscribers: Vec::new(),
        }
    }

    /// The active display language
    pub fn language(&self) -> Language {
        self.state.language
    }

    /// The active display currency
    pub fn currency(&self) -> Currency {
        self.state.currency
    }

    /// Register a synchronous change listener
    pub fn subscribe(&mut self, subscriber: impl Fn(PreferenceChange) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Switch the active language
    ///
    /// Persists the new tag, updates the document language attribute and
    /// notifies subscribers before returning. Re-setting the already-active
    /// language is a no-op with no write and no notification.
    pub fn set_language(&mut self, language: Language) {
        if self.state.language == language {
            return;
        }
        self.state.language = language;
        self.persist(LANGUAGE_KEY, language.code());
        self.document.apply_language(language);
        self.notify(PreferenceChange::LanguageChanged(language));
    }

    /// String-tag variant of [`set_language`](Self::set_language) for
    /// selector controls; an unsupported tag is silently ignored
    pub fn set_language_tag(&mut self, tag: &str) {
        match tag.parse::<Language>() {
            Ok(language) => self.set_language(language),
            Err(_) => tracing::debug!(tag, "ignoring unsupported language tag"),
        }
    }

    /// Switch the active currency; same contract as `set_language`
    pub fn set_currency(&mut self, currency: Currency) {
        if self.state.currency == currency {
            return;
        }
        self.state.currency = currency;
        self.persist(CURRENCY_KEY, currency.code());
        self.notify(PreferenceChange::CurrencyChanged(currency));
    }

    /// String-tag variant of [`set_currency`](Self::set_currency); an
    /// unsupported tag is silently ignored
    pub fn set_currency_tag(&mut self, tag: &str) {
        match tag.parse::<Currency>() {
            Ok(currency) => self.set_currency(currency),
            Err(_) => tracing::debug!(tag, "ignoring unsupported currency tag"),
        }
    }

    /// Total translation lookup under the active language
    ///
    /// Unknown keys come back verbatim; this never panics and never returns
    /// an empty string for a key present in the English table.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        catalog().translate(self.state.language, key)
    }

    /// Lookup plus `{name}` placeholder substitution
    pub fn translate_with(&self, key: &str, params: &HashMap<&str, String>) -> String {
        format_message(self.translate(key), params)
    }

    /// Display a reference-currency (USD) amount in the active currency
    pub fn format_price(&self, amount_usd: f64) -> String {
        money::format_price(amount_usd, self.state.currency)
    }

    /// Convert an amount into the active currency
    ///
    /// Identity when `from` already matches the active currency.
    pub fn convert_price(&self, amount: f64, from: Currency) -> f64 {
        money::convert(amount, from, self.state.currency)
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(error) = self.store.set(key, value) {
            tracing::warn!(%error, key, "failed to persist preference, keeping in-memory value");
        }
    }

    fn notify(&self, change: PreferenceChange) {
        for subscriber in &self.subscribers {
            subscriber(change);
        }
    }
}

fn read_persisted<S: PreferenceStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, key, "preference store read failed, treating as absent");
            None
        }
    }
}
