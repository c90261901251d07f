//! Display formatting for the storefront.
//!
//! Every function here maps a raw domain value (minor currency units, an
//! ISO-8601 timestamp, a status code, a rating) to a string or style token.
//! Nothing holds state; a [`Formatter`] is just a bundle of options.
//!
//! The free functions use the storefront defaults (`fr-FR`, UTC, placeholder
//! for unparseable dates):
//!
//! ```
//! use vitrine_format::{format_price, generate_star_rating, status_badge_class};
//!
//! assert_eq!(format_price(12345, "EUR").unwrap(), "123,45\u{a0}€");
//! assert_eq!(status_badge_class("delivered"), "bg-green-100 text-green-800");
//! assert_eq!(generate_star_rating(3.5), "★★★⯪☆");
//! ```

pub mod badge;
pub mod currency;
pub mod date;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod money;
pub mod rating;

pub use badge::{BadgeStyle, StatusKey, status_badge, status_badge_class};
pub use currency::{Currency, DEFAULT_CURRENCY};
pub use date::{DisplayZone, INVALID_DATE, InvalidDatePolicy, format_date, format_date_time, parse_timestamp};
pub use error::{FormatError, Result};
pub use formatter::{FormatOptions, Formatter};
pub use locale::Locale;
pub use money::{PriceDisplay, format_price, major_to_minor, minor_to_major};
pub use rating::{StarGlyphs, StarRating, generate_star_rating, star_rating};
