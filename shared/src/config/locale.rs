//! Environment locale signal detection
//!
//! The client seeds its initial language and currency from the locale the
//! host environment reports, e.g. `pt-AO` or `pt_AO.UTF-8`. The signal is
//! read once at startup; a missing or malformed signal is never an error,
//! it just falls through the preference precedence chain.

use std::env;

/// A parsed environment locale tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTag {
    /// Lowercase language subtag (`pt` in `pt-AO`)
    pub language: String,
    /// Uppercase region subtag when present (`AO` in `pt-AO`)
    pub region: Option<String>,
}

impl LocaleTag {
    /// Parse tags like `pt-AO`, `pt_AO.UTF-8`, `en_GB@euro` or `en`
    ///
    /// Encoding and modifier suffixes are stripped, then the remainder is
    /// split on `-`/`_` into a language subtag and an optional region
    /// subtag. Returns `None` for anything that does not yield a plausible
    /// language subtag; parsing never panics.
    pub fn parse(raw: &str) -> Option<Self> {
        let base = raw.trim().split(['.', '@']).next().unwrap_or("");
        if base.is_empty() {
            return None;
        }

        let mut parts = base.split(['-', '_']);
        let language = parts.next()?;
        if !(2..=3).contains(&language.len())
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }

        let region = parts
            .next()
            .filter(|r| r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic()))
            .map(|r| r.to_ascii_uppercase());

        Some(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }
}

impl std::fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}

/// Reads the locale signal reported by the host environment
pub struct SystemLocale;

/// POSIX precedence order for locale environment variables
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

impl SystemLocale {
    /// Query the process environment once for a usable locale tag
    ///
    /// `C`, `POSIX` and empty values count as absent and fall through to the
    /// next variable in the cascade.
    pub fn detect() -> Option<LocaleTag> {
        Self::detect_with(|var| env::var(var).ok())
    }

    /// Detection against an arbitrary variable lookup
    pub fn detect_with(lookup: impl Fn(&str) -> Option<String>) -> Option<LocaleTag> {
        for var in LOCALE_VARS {
            if let Some(value) = lookup(var) {
                let value = value.trim();
                if value.is_empty() || value == "C" || value == "POSIX" {
                    continue;
                }
                if let Some(tag) = LocaleTag::parse(value) {
                    return Some(tag);
                }
            }
        }
        None
    }
}
