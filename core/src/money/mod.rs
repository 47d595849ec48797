//! Currency conversion and display formatting
//!
//! Stored prices are denominated in the reference currency (USD). Conversion
//! crosses through USD using the static rate table; formatting follows one
//! of the two documented styles, so output is deterministic for a given
//! `(amount, currency)` pair.

use eb_shared::utils::format;
use eb_shared::Currency;

/// Convert `amount` from one supported currency to another
///
/// Identity when the currencies match. Every supported currency carries a
/// positive rate, so the division is always defined.
pub fn convert(amount: f64, from: Currency, to: Currency) -> f64 {
    if from == to {
        return amount;
    }
    amount / from.usd_rate() * to.usd_rate()
}

/// Render a reference-currency amount in `currency` for display
///
/// Major currencies (USD, EUR) use the symbol glued to a two-decimal value,
/// e.g. `$100.00`. Regional currencies use the symbol, a space and a grouped
/// integer, e.g. `Kz 83,000`.
pub fn format_price(amount_usd: f64, currency: Currency) -> String {
    let converted = convert(amount_usd, Currency::REFERENCE, currency);
    if currency.uses_minor_units() {
        format!("{}{}", currency.symbol(), format::fixed2(converted))
    } else {
        format!("{} {}", currency.symbol(), format::grouped(converted))
    }
}
