//! Regional conventions used by the formatters.
//!
//! The tables follow CLDR output for each locale: separators, where the
//! currency symbol goes, month names and the long/short date layouts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::currency::Currency;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "fr-FR", alias = "fr", alias = "fr_FR")]
    FrFr,
    #[serde(rename = "en-US", alias = "en", alias = "en_US")]
    EnUs,
    #[serde(rename = "en-GB", alias = "en_GB")]
    EnGb,
    #[serde(rename = "de-DE", alias = "de", alias = "de_DE")]
    DeDe,
}

/// Where the currency symbol sits relative to the digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// "$1,234.56"
    Prefix,
    /// "1 234,56 €", separated by a no-break space
    Suffix,
}

/// Order of the date parts in the long and short layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// "15 janvier 2024"
    DayMonthYear,
    /// "15. Januar 2024"
    DayDotMonthYear,
    /// "January 15, 2024"
    MonthDayYear,
}

const FR_MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];
const FR_MONTHS_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];
const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const EN_US_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EN_GB_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];
const DE_MONTHS: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
    "Oktober", "November", "Dezember",
];
const DE_MONTHS_SHORT: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
    "Dez.",
];

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::FrFr, Locale::EnUs, Locale::EnGb, Locale::DeDe];

    /// BCP 47 tag
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::FrFr => "fr-FR",
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::FrFr | Locale::DeDe => ',',
            Locale::EnUs | Locale::EnGb => '.',
        }
    }

    /// French groups with a narrow no-break space (U+202F)
    pub fn group_separator(&self) -> char {
        match self {
            Locale::FrFr => '\u{202f}',
            Locale::DeDe => '.',
            Locale::EnUs | Locale::EnGb => ',',
        }
    }

    pub fn symbol_position(&self) -> SymbolPosition {
        match self {
            Locale::FrFr | Locale::DeDe => SymbolPosition::Suffix,
            Locale::EnUs | Locale::EnGb => SymbolPosition::Prefix,
        }
    }

    /// Symbol shown for `currency` in this locale; foreign dollars and
    /// pounds are disambiguated the way CLDR does.
    pub fn currency_symbol(&self, currency: &Currency) -> &'static str {
        match (self, currency.code) {
            (Locale::FrFr, "USD") => "$US",
            (Locale::FrFr, "GBP") => "£GB",
            (Locale::FrFr, "JPY") => "JPY",
            (Locale::FrFr, "CAD") => "$CA",
            (Locale::EnGb, "USD") => "US$",
            (Locale::EnGb, "JPY") => "JP¥",
            (Locale::EnUs | Locale::EnGb | Locale::DeDe, "CAD") => "CA$",
            _ => currency.symbol,
        }
    }

    pub fn month_name(&self, month0: usize) -> &'static str {
        let table = match self {
            Locale::FrFr => &FR_MONTHS,
            Locale::EnUs | Locale::EnGb => &EN_MONTHS,
            Locale::DeDe => &DE_MONTHS,
        };
        table[month0 % 12]
    }

    pub fn month_abbrev(&self, month0: usize) -> &'static str {
        let table = match self {
            Locale::FrFr => &FR_MONTHS_SHORT,
            Locale::EnUs => &EN_US_MONTHS_SHORT,
            Locale::EnGb => &EN_GB_MONTHS_SHORT,
            Locale::DeDe => &DE_MONTHS_SHORT,
        };
        table[month0 % 12]
    }

    pub fn date_layout(&self) -> DateLayout {
        match self {
            Locale::FrFr | Locale::EnGb => DateLayout::DayMonthYear,
            Locale::DeDe => DateLayout::DayDotMonthYear,
            Locale::EnUs => DateLayout::MonthDayYear,
        }
    }

    pub fn uses_12_hour_clock(&self) -> bool {
        matches!(self, Locale::EnUs)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Accepts `fr-FR`, `fr_FR` or a bare language, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" => Ok(Locale::FrFr),
            "en" | "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de" | "de-de" => Ok(Locale::DeDe),
            _ => Err(format!(
                "unsupported locale '{}' (expected one of fr-FR, en-US, en-GB, de-DE)",
                s
            )),
        }
    }
}
