//! Static currency registry.
//!
//! Rates are expressed against the US dollar (rate 1.0), as of August 2021.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// A statically known currency.
#[derive(Debug, PartialEq)]
pub struct Currency {
    pub name: &'static str,
    /// Symbols, words and abbreviations that designate this currency.
    pub synonyms: &'static [&'static str],
    /// Value of one unit in dollars.
    pub rate: f64,
}

pub static DOLLAR: Currency = Currency {
    name: "dollar",
    synonyms: &["$", "dollar", "dollars", "USD", "US dollars", "Dollars"],
    rate: 1.0,
};

pub static EURO: Currency = Currency {
    name: "euro",
    synonyms: &["€", "euro", "euros", "EUR", "Euros"],
    rate: 1.19,
};

pub static POUND: Currency = Currency {
    name: "pound",
    synonyms: &["£", "pound", "pounds", "GBP", "Pounds"],
    rate: 1.39,
};

pub static YEN: Currency = Currency {
    name: "yen",
    synonyms: &["¥", "yen", "JPY", "Yen"],
    rate: 0.0092,
};

pub static YUAN: Currency = Currency {
    name: "yuan",
    synonyms: &["yuan", "CNY", "RMB"],
    rate: 0.15,
};

pub static BITCOIN: Currency = Currency {
    name: "bitcoin",
    synonyms: &["฿", "bitcoin", "bitcoins", "BTC"],
    rate: 37716.0,
};

pub static CURRENCIES: [&Currency; 6] = [&DOLLAR, &EURO, &POUND, &YEN, &YUAN, &BITCOIN];

/// Symbols rendered before the amount (`$ 12`) rather than after it.
pub const CURRENCY_SYMBOLS: [&str; 6] = ["$", "£", "₤", "¥", "฿", "€"];

const CURRENCY_WORDS: [&str; 11] = [
    "dollar", "dollars", "pound", "pounds", "yen", "yens", "yuan", "bitcoin", "bitcoins", "euro",
    "euros",
];

lazy_static! {
    /// Words and symbols recognised as currency markers, independently of the
    /// abbreviation list.
    pub static ref CURRENCY_MARKERS: HashSet<&'static str> = CURRENCY_WORDS
        .iter()
        .chain(CURRENCY_SYMBOLS.iter())
        .copied()
        .collect();
}

pub fn is_currency_symbol(unit: &str) -> bool {
    CURRENCY_SYMBOLS.iter().any(|s| *s == unit)
}

/// Registry entry by canonical name.
pub fn by_name(name: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().copied().find(|c| c.name == name)
}

/// First registry currency listing `designator` among its synonyms.
pub fn by_synonym(designator: &str) -> Option<&'static Currency> {
    CURRENCIES
        .iter()
        .copied()
        .find(|c| c.synonyms.iter().any(|s| *s == designator))
}

/// Unit kept verbatim when a marker is not in the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct AdHocCurrency {
    pub unit: String,
}

impl AdHocCurrency {
    pub const RATE: f64 = 1.0;

    pub fn new(unit: impl Into<String>) -> Self {
        Self { unit: unit.into() }
    }
}

/// Outcome of currency resolution; every designator maps to one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedCurrency {
    Registered(&'static Currency),
    AdHoc(AdHocCurrency),
}

impl ResolvedCurrency {
    pub fn rate(&self) -> f64 {
        match self {
            Self::Registered(currency) => currency.rate,
            Self::AdHoc(_) => AdHocCurrency::RATE,
        }
    }

    /// Canonical name, absent for ad hoc units.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Registered(currency) => Some(currency.name),
            Self::AdHoc(_) => None,
        }
    }
}

/// Resolve designator parts (the text around the amount) to a currency.
///
/// A single part is looked up among the registry synonyms; several parts only
/// go through the `"US"` check. Anything unresolved becomes an ad hoc unit.
pub fn resolve(parts: &[&str]) -> ResolvedCurrency {
    let joined = parts.join(" ");

    if let [single] = parts {
        if let Some(currency) = by_synonym(single) {
            return ResolvedCurrency::Registered(currency);
        }
    }

    if joined.contains("US") {
        return ResolvedCurrency::Registered(&DOLLAR);
    }

    ResolvedCurrency::AdHoc(AdHocCurrency::new(joined))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert an amount between two rates, rounded to cents.
pub fn convert(amount: f64, old_rate: f64, new_rate: f64) -> f64 {
    round2(amount * old_rate / new_rate)
}

/// Apply a signed percentage to an amount, rounded to cents.
pub fn vary(amount: f64, percent: i32) -> f64 {
    round2(amount + amount * (percent as f64 / 100.0))
}
