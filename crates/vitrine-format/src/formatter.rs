use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::DEFAULT_CURRENCY;
use crate::date::{self, DisplayZone, INVALID_DATE, InvalidDatePolicy};
use crate::locale::Locale;
use crate::money::{self, PriceDisplay};
use crate::rating::{StarGlyphs, star_rating};
use crate::{FormatError, Result};

/// Everything that varies between storefront deployments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub locale: Locale,
    pub zone: DisplayZone,
    pub invalid_dates: InvalidDatePolicy,
    pub stars: StarGlyphs,
}

/// Formats storefront values under one set of [`FormatOptions`].
///
/// Immutable and cheap to copy; share one across threads freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn locale(&self) -> Locale {
        self.options.locale
    }

    pub fn price(&self, amount_minor: i64, currency: &str) -> Result<String> {
        let currency = money::resolve_currency(currency)?;
        Ok(money::render_price(amount_minor, &currency, self.options.locale))
    }

    /// Price in [`DEFAULT_CURRENCY`]
    pub fn price_default(&self, amount_minor: i64) -> Result<String> {
        self.price(amount_minor, DEFAULT_CURRENCY)
    }

    pub fn price_display(&self, amount_minor: i64, currency: &str) -> Result<PriceDisplay> {
        let resolved = money::resolve_currency(currency)?;
        Ok(PriceDisplay {
            cents: amount_minor,
            major: money::minor_to_major(amount_minor),
            currency: resolved.code,
            formatted: money::render_price(amount_minor, &resolved, self.options.locale),
        })
    }

    /// Long form: day, full month name, year
    pub fn date(&self, input: &str) -> Result<String> {
        match date::parse_timestamp(input, self.options.zone) {
            Some(dt) => Ok(date::render_long_date(&dt, self.options.locale)),
            None => self.unparseable(input),
        }
    }

    /// Short form: day, abbreviated month, year, hour:minute
    pub fn date_time(&self, input: &str) -> Result<String> {
        match date::parse_timestamp(input, self.options.zone) {
            Some(dt) => Ok(date::render_short_date_time(&dt, self.options.locale)),
            None => self.unparseable(input),
        }
    }

    /// Long form of a calendar day, with no time zone conversion
    pub fn calendar_date(&self, day: NaiveDate) -> String {
        date::render_long_date(&day, self.options.locale)
    }

    pub fn stars(&self, rating: f64) -> String {
        star_rating(rating).render(&self.options.stars)
    }

    fn unparseable(&self, input: &str) -> Result<String> {
        match self.options.invalid_dates {
            InvalidDatePolicy::Placeholder => {
                tracing::debug!(input, "unparseable timestamp rendered as placeholder");
                Ok(INVALID_DATE.to_string())
            }
            InvalidDatePolicy::Strict => Err(FormatError::InvalidDate(input.to_string())),
        }
    }
}
