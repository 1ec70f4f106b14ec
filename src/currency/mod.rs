use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "BAM" => "KM".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, sanitize(value));
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Formats a ledger amount with an explicit sign: `+$1,234.50`, `-$40.00`.
///
/// Every signed amount in the app goes through this one convention; zero is
/// rendered as a credit (`+$0.00`). Non-finite input formats as zero.
pub fn format_money(amount: f64) -> String {
    format_money_in(amount, &CurrencyCode::default(), &LocaleConfig::default())
}

pub fn format_money_in(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let amount = round_minor(amount, code);
    let sign = if amount < 0.0 { '-' } else { '+' };
    format!("{}{}", sign, unsigned_body(amount, code, locale))
}

/// Formats a stored balance: `$17,298.92`, with a `-` only when negative.
pub fn format_balance(amount: f64) -> String {
    format_balance_in(amount, &CurrencyCode::default(), &LocaleConfig::default())
}

pub fn format_balance_in(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let amount = round_minor(amount, code);
    let body = unsigned_body(amount, code, locale);
    if amount < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Rounds to the currency's minor units so the sign matches the printed digits.
/// Negative zero collapses to `0.0`.
fn round_minor(amount: f64, code: &CurrencyCode) -> f64 {
    let scale = 10f64.powi(i32::from(minor_units_for(code.as_str())));
    let rounded = (sanitize(amount) * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn unsigned_body(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let precision = minor_units_for(code.as_str());
    let number = format_number(locale, amount.abs(), precision);
    format!("{}{}", symbol_for(code.as_str()), number)
}

/// Short label for chart bars: `$1.5k` from 1000 upwards, `$850` below.
pub fn format_compact(amount: f64) -> String {
    let amount = sanitize(amount);
    if amount >= 1000.0 {
        format!("${:.1}k", amount / 1000.0)
    } else {
        format!("${}", amount)
    }
}

/// Month-over-month change badge: `▲ 12.5%` or `▼ 3.0%`.
pub fn format_percentage(change: f64) -> String {
    let change = sanitize(change);
    let arrow = if change >= 0.0 { '▲' } else { '▼' };
    format!("{} {:.1}%", arrow, change.abs())
}

/// Fixed conversion rates offered by the convert flow.
#[derive(Debug, Clone, Default)]
pub struct ExchangeTable {
    rates: BTreeMap<(CurrencyCode, CurrencyCode), f64>,
}

static STANDARD_RATES: Lazy<ExchangeTable> = Lazy::new(|| {
    let mut table = ExchangeTable::default();
    for (from, to, rate) in [
        ("USD", "EUR", 0.92),
        ("USD", "GBP", 0.79),
        ("USD", "BAM", 1.79),
        ("EUR", "USD", 1.09),
        ("EUR", "GBP", 0.86),
        ("EUR", "BAM", 1.96),
        ("GBP", "USD", 1.27),
        ("GBP", "EUR", 1.17),
        ("GBP", "BAM", 2.27),
        ("BAM", "USD", 0.56),
        ("BAM", "EUR", 0.51),
        ("BAM", "GBP", 0.44),
    ] {
        table.add_rate(from, to, rate);
    }
    table
});

impl ExchangeTable {
    /// The bundled USD / EUR / GBP / BAM table.
    pub fn standard() -> &'static ExchangeTable {
        &STANDARD_RATES
    }

    pub fn add_rate(&mut self, from: &str, to: &str, rate: f64) {
        self.rates
            .insert((CurrencyCode::new(from), CurrencyCode::new(to)), rate);
    }

    /// Listed currencies in alphabetical order.
    pub fn currencies(&self) -> Vec<CurrencyCode> {
        let mut codes: Vec<CurrencyCode> = self
            .rates
            .keys()
            .flat_map(|(from, to)| [from.clone(), to.clone()])
            .collect();
        codes.sort();
        codes.dedup();
        codes
    }

    /// Rate for `from → to`; parity for identical codes, `1.0` for unknown pairs.
    pub fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> f64 {
        if from == to {
            return 1.0;
        }
        self.rates
            .get(&(from.clone(), to.clone()))
            .copied()
            .unwrap_or(1.0)
    }

    /// Converts and rounds to two decimals.
    pub fn convert(&self, amount: f64, from: &CurrencyCode, to: &CurrencyCode) -> f64 {
        round_cents(sanitize(amount) * self.rate(from, to))
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_always_carries_a_sign() {
        assert_eq!(format_money(1234.5), "+$1,234.50");
        assert_eq!(format_money(-40.0), "-$40.00");
        assert_eq!(format_money(0.0), "+$0.00");
        assert_eq!(format_money(-1_234_567.891), "-$1,234,567.89");
    }

    #[test]
    fn non_finite_amounts_format_as_zero() {
        assert_eq!(format_money(f64::NAN), "+$0.00");
        assert_eq!(format_balance(f64::INFINITY), "$0.00");
    }

    #[test]
    fn amounts_rounding_to_zero_render_as_credit() {
        assert_eq!(format_money(-0.004), "+$0.00");
        assert_eq!(format_balance(-0.004), "$0.00");
        assert_eq!(format_money(-0.006), "-$0.01");
        assert_eq!(format_money(-0.0), "+$0.00");
        assert_eq!(
            format_money_in(-0.4, &CurrencyCode::new("JPY"), &LocaleConfig::default()),
            "+¥0"
        );
    }

    #[test]
    fn balance_has_no_plus_sign() {
        assert_eq!(format_balance(17298.92), "$17,298.92");
        assert_eq!(format_balance(-12.0), "-$12.00");
    }

    #[test]
    fn honours_locale_separators() {
        let locale = LocaleConfig {
            language_tag: "bs-BA".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        };
        let formatted = format_money_in(-1234.5, &CurrencyCode::new("eur"), &locale);
        assert_eq!(formatted, "-€1.234,50");
    }

    #[test]
    fn compact_labels_switch_at_one_thousand() {
        assert_eq!(format_compact(1500.0), "$1.5k");
        assert_eq!(format_compact(999.0), "$999");
        assert_eq!(format_compact(42.5), "$42.5");
    }

    #[test]
    fn percentage_badge_uses_arrows() {
        assert_eq!(format_percentage(12.345), "▲ 12.3%");
        assert_eq!(format_percentage(-3.0), "▼ 3.0%");
        assert_eq!(format_percentage(0.0), "▲ 0.0%");
    }

    #[test]
    fn standard_table_converts_and_rounds() {
        let table = ExchangeTable::standard();
        let usd = CurrencyCode::new("USD");
        let eur = CurrencyCode::new("EUR");
        assert_eq!(table.convert(100.0, &usd, &eur), 92.0);
        assert_eq!(table.convert(10.0, &eur, &eur), 10.0);
        assert_eq!(table.convert(3.333, &usd, &CurrencyCode::new("XYZ")), 3.33);
        assert_eq!(table.currencies().len(), 4);
    }
}
