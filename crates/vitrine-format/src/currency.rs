/// Currency used when a caller does not name one
pub const DEFAULT_CURRENCY: &str = "EUR";

/// ISO 4217 currency with its display conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    /// Locale-neutral symbol; locales may override it
    pub symbol: &'static str,
    /// Digits shown after the decimal separator
    pub fraction_digits: u32,
}

const SUPPORTED: &[Currency] = &[
    Currency { code: "EUR", symbol: "€", fraction_digits: 2 },
    Currency { code: "USD", symbol: "$", fraction_digits: 2 },
    Currency { code: "GBP", symbol: "£", fraction_digits: 2 },
    Currency { code: "CHF", symbol: "CHF", fraction_digits: 2 },
    Currency { code: "JPY", symbol: "¥", fraction_digits: 0 },
    Currency { code: "CAD", symbol: "$", fraction_digits: 2 },
];

impl Currency {
    /// Look up a currency by code, case-insensitively
    pub fn lookup(code: &str) -> Option<Currency> {
        let code = code.trim();
        SUPPORTED
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .copied()
    }

    pub fn supported() -> &'static [Currency] {
        SUPPORTED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Currency::lookup("eur").map(|c| c.code), Some("EUR"));
        assert_eq!(Currency::lookup(" usd ").map(|c| c.code), Some("USD"));
        assert!(Currency::lookup("XYZ").is_none());
        assert!(Currency::lookup("").is_none());
    }
}
