//! Currency amount rendering.
//!
//! Amounts stay decimal strings end to end. They are only rewritten
//! textually, so no floating point rounding ever touches them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static CURRENCY_SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("USD", "$"),
        ("GBP", "£"),
        ("JPY", "¥"),
        ("MXN", "$"),
        ("CHF", "CHF"),
        ("CAD", "$"),
        ("CNY", "¥"),
        ("SGD", "$"),
        ("EUR", "€"),
    ])
});

/// Render an amount with its currency, inverting the sign.
///
/// The API reports charges as negative ledger values, so the sign is always
/// flipped for display. Trailing fractional zeros are dropped, and the unit is
/// replaced by its symbol when one is known.
///
/// # Example
///
/// ```
/// use twilio_values::domain::format_price;
///
/// assert_eq!(format_price("usd", "10.50"), "$-10.5");
/// assert_eq!(format_price("USD", "-3.00"), "$3");
/// assert_eq!(format_price("xyz", "7"), "XYZ -7");
/// ```
pub fn format_price(unit: &str, amount: &str) -> String {
    if amount.is_empty() {
        return String::new();
    }

    let mut amount = match amount.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => format!("-{}", amount),
    };

    while amount.contains('.') && amount.ends_with('0') {
        amount.pop();
    }
    if amount.ends_with('.') {
        amount.pop();
    }

    let unit = unit.to_uppercase();
    match CURRENCY_SYMBOLS.get(unit.as_str()) {
        Some(symbol) => format!("{}{}", symbol, amount),
        None if unit.is_empty() => amount,
        None => format!("{} {}", unit, amount),
    }
}

/// An amount and the currency it is denominated in, as sent by the API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Price {
    /// Signed decimal string, e.g. `"-0.00750"`
    pub amount: String,

    /// Three-letter currency code, e.g. `"USD"`
    pub unit: String,
}

impl Price {
    pub fn new(amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            unit: unit.into(),
        }
    }

    /// Display form, see [`format_price`].
    pub fn friendly(&self) -> String {
        format_price(&self.unit, &self.amount)
    }
}
