//! Display-currency types, exchange rates and country seeding
//!
//! All stored prices on the platform are denominated in the reference
//! currency (USD). The rate table is static for the process lifetime; there
//! is no live refresh in this layer.

use serde::{Deserialize, Serialize};

/// Display currency governing conversion and formatting of monetary amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    /// Angolan Kwanza
    #[serde(rename = "AOA")]
    Aoa,
    /// South African Rand
    #[serde(rename = "ZAR")]
    Zar,
    /// Nigerian Naira
    #[serde(rename = "NGN")]
    Ngn,
    /// Ghanaian Cedi
    #[serde(rename = "GHS")]
    Ghs,
    /// Kenyan Shilling
    #[serde(rename = "KES")]
    Kes,
}

impl Default for Currency {
    fn default() -> Self {
        Currency::REFERENCE
    }
}

impl Currency {
    /// The currency stored prices are denominated in
    pub const REFERENCE: Currency = Currency::Usd;

    /// All supported currencies, in selector display order
    pub const ALL: [Currency; 7] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Aoa,
        Currency::Zar,
        Currency::Ngn,
        Currency::Ghs,
        Currency::Kes,
    ];

    /// Get currency code (ISO 4217)
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Aoa => "AOA",
            Currency::Zar => "ZAR",
            Currency::Ngn => "NGN",
            Currency::Ghs => "GHS",
            Currency::Kes => "KES",
        }
    }

    /// Get display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Aoa => "Kz",
            Currency::Zar => "R",
            Currency::Ngn => "₦",
            Currency::Ghs => "₵",
            Currency::Kes => "KSh",
        }
    }

    /// Get currency name in English
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Aoa => "Angolan Kwanza",
            Currency::Zar => "South African Rand",
            Currency::Ngn => "Nigerian Naira",
            Currency::Ghs => "Ghanaian Cedi",
            Currency::Kes => "Kenyan Shilling",
        }
    }

    /// Units of this currency per one unit of the reference currency
    ///
    /// Every supported currency carries exactly one positive rate.
    pub fn usd_rate(&self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Eur => 0.85,
            Currency::Aoa => 830.0,
            Currency::Zar => 18.5,
            Currency::Ngn => 460.0,
            Currency::Ghs => 12.0,
            Currency::Kes => 150.0,
        }
    }

    /// Whether amounts are displayed with two decimal places
    ///
    /// The major currencies use the two-decimal style; the regional
    /// currencies use a grouped integer style.
    pub fn uses_minor_units(&self) -> bool {
        matches!(self, Currency::Usd | Currency::Eur)
    }

    /// Default currency for a two-letter country code
    ///
    /// Used only to seed the initial currency when no explicit preference
    /// exists. Markets without a supported local currency default to USD.
    pub fn for_country(country: &str) -> Option<Self> {
        match country.to_ascii_uppercase().as_str() {
            "AO" => Some(Currency::Aoa),
            "ZA" => Some(Currency::Zar),
            "NG" => Some(Currency::Ngn),
            "GH" => Some(Currency::Ghs),
            "KE" => Some(Currency::Kes),
            "MZ" | "CV" | "GW" | "ST" => Some(Currency::Usd),
            _ => None,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "AOA" => Ok(Currency::Aoa),
            "ZAR" => Ok(Currency::Zar),
            "NGN" => Ok(Currency::Ngn),
            "GHS" => Ok(Currency::Ghs),
            "KES" => Ok(Currency::Kes),
            _ => Err(format!("Unsupported currency: {}", s)),
        }
    }
}
