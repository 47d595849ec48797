//! Display-language types for the client surfaces

use serde::{Deserialize, Serialize};

/// Display language governing which translation table is consulted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pt")]
    Portuguese,
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl Language {
    /// All supported languages, in selector display order
    pub const ALL: [Language; 2] = [Language::English, Language::Portuguese];

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Portuguese => "pt",
        }
    }

    /// Get language name in English
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Portuguese => "Portuguese",
        }
    }

    /// Get native language name
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Portuguese => "Português",
        }
    }

    /// Match the language subtag of an environment locale string
    ///
    /// Accepts the bare subtag (`"pt"`) or a full tag (`"pt-AO"`, `"pt_AO"`);
    /// only the part before the first separator is considered. Returns `None`
    /// when the subtag is outside the supported set.
    pub fn from_locale_tag(tag: &str) -> Option<Self> {
        let prefix = tag.split(['-', '_']).next()?;
        match prefix.to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "pt" => Some(Language::Portuguese),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "pt" | "por" | "portuguese" | "português" => Ok(Language::Portuguese),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}
