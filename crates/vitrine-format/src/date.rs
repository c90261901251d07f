use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Formatter;
use crate::locale::{DateLayout, Locale};

/// Rendered in place of an unparseable timestamp under the placeholder policy
pub const INVALID_DATE: &str = "Invalid Date";

/// What the date formatters do with input they cannot parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidDatePolicy {
    /// Render [`INVALID_DATE`] and carry on
    #[default]
    Placeholder,
    /// Fail with `FormatError::InvalidDate`
    Strict,
}

impl FromStr for InvalidDatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Ok(InvalidDatePolicy::Placeholder),
            "strict" | "error" => Ok(InvalidDatePolicy::Strict),
            _ => Err(format!("unknown invalid-date policy '{}'", s)),
        }
    }
}

/// Fixed UTC offset timestamps are rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayZone(FixedOffset);

impl DisplayZone {
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    pub fn from_offset(offset: FixedOffset) -> Self {
        Self(offset)
    }

    pub fn offset(&self) -> FixedOffset {
        self.0
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.local_minus_utc() == 0 {
            f.write_str("UTC")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for DisplayZone {
    type Err = String;

    /// Accepts `UTC`, `Z`, `+02:00`, `-0530` or `+01`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("utc") || s.eq_ignore_ascii_case("z") {
            return Ok(Self::utc());
        }

        let invalid = || format!("invalid time zone offset '{}' (expected UTC or ±HH:MM)", s);
        let (sign, rest) = match s.chars().next() {
            Some('+') => (1, &s[1..]),
            Some('-') => (-1, &s[1..]),
            _ => return Err(invalid()),
        };
        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let (hours, minutes) = match digits.len() {
            2 => (&digits[..2], "0"),
            4 => (&digits[..2], &digits[2..]),
            _ => return Err(invalid()),
        };
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if minutes >= 60 {
            return Err(invalid());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for DisplayZone {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplayZone> for String {
    fn from(zone: DisplayZone) -> Self {
        zone.to_string()
    }
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp into the display zone.
///
/// Offsets are honoured and converted; naive date-times are taken as wall
/// time in `zone`; a bare date means UTC midnight.
pub fn parse_timestamp(input: &str, zone: DisplayZone) -> Option<DateTime<FixedOffset>> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&zone.0));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return zone.0.from_local_datetime(&naive).single();
        }
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(&zone.0))
}

/// Long form, e.g. "15 janvier 2024", with the storefront defaults
pub fn format_date(input: &str) -> crate::Result<String> {
    Formatter::default().date(input)
}

/// Short form with time, e.g. "15 janv. 2024, 14:30", with the storefront defaults
pub fn format_date_time(input: &str) -> crate::Result<String> {
    Formatter::default().date_time(input)
}

pub(crate) fn render_long_date<D: Datelike>(date: &D, locale: Locale) -> String {
    let month = locale.month_name(date.month0() as usize);
    layout_date(date, locale.date_layout(), month)
}

pub(crate) fn render_short_date_time(dt: &DateTime<FixedOffset>, locale: Locale) -> String {
    let month = locale.month_abbrev(dt.month0() as usize);
    let date = layout_date(dt, locale.date_layout(), month);

    let time = if locale.uses_12_hour_clock() {
        let (pm, hour) = dt.hour12();
        format!(
            "{:02}:{:02}\u{202f}{}",
            hour,
            dt.minute(),
            if pm { "PM" } else { "AM" }
        )
    } else {
        format!("{:02}:{:02}", dt.hour(), dt.minute())
    };

    format!("{}, {}", date, time)
}

fn layout_date<D: Datelike>(date: &D, layout: DateLayout, month: &str) -> String {
    match layout {
        DateLayout::DayMonthYear => format!("{} {} {}", date.day(), month, date.year()),
        DateLayout::DayDotMonthYear => format!("{}. {} {}", date.day(), month, date.year()),
        DateLayout::MonthDayYear => format!("{} {}, {}", month, date.day(), date.year()),
    }
}
