//! Parsing of the loose `"Month Day"` strings found in transaction fixtures.
//!
//! Fixture dates carry no year, so every parsed date is pinned to
//! [`REFERENCE_YEAR`]. Comparisons built on top of these dates only ever look
//! at the month component.

use chrono::{Datelike, Month, NaiveDate};

/// Year assigned to every fixture date.
pub const REFERENCE_YEAR: i32 = 2025;

pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// A fixture date resolved to a calendar day in [`REFERENCE_YEAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedDate(NaiveDate);

impl ParsedDate {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> Month {
        month_from_index(self.0.month0())
    }

    /// Zero-based month index (`0` = January).
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<ParsedDate> for NaiveDate {
    fn from(value: ParsedDate) -> Self {
        value.0
    }
}

/// Parses strings such as `"June 28"`, `"Jun 28"` or `"June 28, 2024"`.
///
/// Returns `None` when the text has fewer than two tokens, the first token
/// does not prefix a month name, the second token carries no leading digits,
/// or the day does not exist in that month.
pub fn parse_date(input: &str) -> Option<ParsedDate> {
    let cleaned = input.replace(',', "");
    let mut tokens = cleaned.split_whitespace();
    let month = month_from_prefix(tokens.next()?)?;
    let day = leading_day(tokens.next()?)?;
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, month.number_from_month(), day).map(ParsedDate)
}

/// Resolves a case-insensitive prefix (`"jun"`, `"Sept"`) to a month.
/// The first month in calendar order wins on ambiguous prefixes.
pub fn month_from_prefix(token: &str) -> Option<Month> {
    let needle = token.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    MONTHS
        .iter()
        .copied()
        .find(|month| month.name().to_lowercase().starts_with(&needle))
}

/// Maps a zero-based index onto a month, wrapping past December.
pub fn month_from_index(index: u32) -> Month {
    MONTHS[(index % 12) as usize]
}

/// Renders a date the way fixtures store it, e.g. `"June 28"`.
pub fn format_month_day(date: NaiveDate) -> String {
    format!("{} {}", month_from_index(date.month0()).name(), date.day())
}

/// Same as [`parse_date`] for fields that may be absent.
pub fn parse_optional_date(input: Option<&str>) -> Option<ParsedDate> {
    input.and_then(parse_date)
}

fn leading_day(token: &str) -> Option<u32> {
    let digits: String = token.chars().take_while(|ch| ch.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
