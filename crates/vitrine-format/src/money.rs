use serde::Serialize;

use crate::currency::Currency;
use crate::locale::{Locale, SymbolPosition};
use crate::{FormatError, Formatter, Result};

const NBSP: char = '\u{a0}';

/// Minor units (cents) to major units. Exact for any amount below 2^53.
pub fn minor_to_major(amount_minor: i64) -> f64 {
    amount_minor as f64 / 100.0
}

/// Major units to minor units, rounding half away from zero.
///
/// `major_to_minor(minor_to_major(c)) == c` for every integer amount the
/// library produced; arbitrary floats such as `1.005` are subject to binary
/// representation (`100.49999…` rounds to `100`).
pub fn major_to_minor(amount_major: f64) -> i64 {
    (amount_major * 100.0).round() as i64
}

/// Render an amount in minor units with the storefront defaults (fr-FR).
///
/// `format_price(12345, "EUR")` gives `"123,45\u{a0}€"`.
pub fn format_price(amount_minor: i64, currency: &str) -> Result<String> {
    Formatter::default().price(amount_minor, currency)
}

/// One amount seen three ways, as the storefront's price helper exposes it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceDisplay {
    pub cents: i64,
    pub major: f64,
    pub currency: &'static str,
    pub formatted: String,
}

pub(crate) fn resolve_currency(code: &str) -> Result<Currency> {
    Currency::lookup(code).ok_or_else(|| FormatError::UnsupportedCurrency(code.to_string()))
}

pub(crate) fn render_price(amount_minor: i64, currency: &Currency, locale: Locale) -> String {
    let scale = 10u64.pow(currency.fraction_digits);
    let divisor = 100 / scale;
    let abs = amount_minor.unsigned_abs();
    // Half away from zero: round the magnitude, re-apply the sign below.
    let units = if divisor > 1 {
        (abs + divisor / 2) / divisor
    } else {
        abs
    };
    let whole = units / scale;
    let fraction = units % scale;

    let mut number = group_digits(whole, locale.group_separator());
    if currency.fraction_digits > 0 {
        number.push(locale.decimal_separator());
        number.push_str(&format!(
            "{:0width$}",
            fraction,
            width = currency.fraction_digits as usize
        ));
    }

    let symbol = locale.currency_symbol(currency);
    let body = match locale.symbol_position() {
        SymbolPosition::Suffix => format!("{}{}{}", number, NBSP, symbol),
        SymbolPosition::Prefix => {
            let spaced = symbol.chars().last().is_some_and(|c| c.is_alphabetic());
            if spaced {
                format!("{}{}{}", symbol, NBSP, number)
            } else {
                format!("{}{}", symbol, number)
            }
        }
    };

    if amount_minor < 0 && units > 0 {
        format!("-{}", body)
    } else {
        body
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eur() -> Currency {
        Currency::lookup("EUR").unwrap()
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0, ','), "0");
        assert_eq!(group_digits(999, ','), "999");
        assert_eq!(group_digits(1000, ','), "1,000");
        assert_eq!(group_digits(1234567, '.'), "1.234.567");
    }

    #[test]
    fn test_render_french_grouping() {
        assert_eq!(
            render_price(123456789, &eur(), Locale::FrFr),
            "1\u{202f}234\u{202f}567,89\u{a0}€"
        );
    }

    #[test]
    fn test_render_prefix_locales() {
        let usd = Currency::lookup("USD").unwrap();
        let chf = Currency::lookup("CHF").unwrap();
        assert_eq!(render_price(123456, &usd, Locale::EnUs), "$1,234.56");
        assert_eq!(render_price(123456, &usd, Locale::EnGb), "US$1,234.56");
        assert_eq!(render_price(995, &chf, Locale::EnUs), "CHF\u{a0}9.95");
    }

    #[test]
    fn test_render_german() {
        assert_eq!(render_price(123456, &eur(), Locale::DeDe), "1.234,56\u{a0}€");
    }

    #[test]
    fn test_zero_fraction_digit_currency_rounds_half_away() {
        let jpy = Currency::lookup("JPY").unwrap();
        assert_eq!(render_price(12345, &jpy, Locale::FrFr), "123\u{a0}JPY");
        assert_eq!(render_price(12350, &jpy, Locale::EnUs), "¥124");
        assert_eq!(render_price(-12350, &jpy, Locale::EnUs), "-¥124");
    }

    #[test]
    fn test_negative_amount_keeps_digits() {
        assert_eq!(render_price(-12345, &eur(), Locale::FrFr), "-123,45\u{a0}€");
        assert_eq!(render_price(-5, &eur(), Locale::EnUs), "-€0.05");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(minor_to_major(12345), 123.45);
        assert_eq!(major_to_minor(123.45), 12345);
        assert_eq!(major_to_minor(0.125), 13);
        assert_eq!(major_to_minor(-0.125), -13);
    }
}
