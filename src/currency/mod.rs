//! en-US presentation helpers for amounts, account numbers and dates.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

const GROUPING_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `7/28/2024`
    Short,
    /// `Jul 28, 2024`
    Medium,
}

/// Symbol prefix for a currency code; unknown codes render as `"CODE "`.
pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        other => format!("{} ", other),
    }
}

/// Two-decimal number with thousands grouping, e.g. `1,234.56`.
pub fn format_number(value: f64) -> String {
    let body = format_fixed(value.abs());
    let (int_part, fraction) = body.split_once('.').unwrap_or((body.as_str(), "00"));
    let grouped = group_digits(int_part, GROUPING_SEPARATOR);
    if value < 0.0 && body != "0.00" {
        format!("-{}.{}", grouped, fraction)
    } else {
        format!("{}.{}", grouped, fraction)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Currency amount with the sign ahead of the symbol: `$1,234.56`, `-$750.45`.
pub fn format_currency(amount: f64, code: &str) -> String {
    let symbol = symbol_for(code);
    let body = format_number(amount.abs());
    if amount < 0.0 && body != "0.00" {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

/// Signed display used by transaction lists: debits `-$5.75`, credits `+$2,500.00`.
pub fn format_signed(amount: f64, code: &str) -> String {
    if amount < 0.0 {
        format_currency(amount, code)
    } else {
        format!("+{}", format_currency(amount, code))
    }
}

/// Fixed two-decimal amount without grouping, as used in confirmation summaries.
///
/// Rounds the exact binary value half away from zero, so `1.125` gives `1.13`
/// while `1.005` (stored just below the tie) gives `1.00`.
pub fn format_fixed(amount: f64) -> String {
    match Decimal::from_f64_retain(amount) {
        Some(exact) => {
            let mut cents = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            cents.rescale(2);
            cents.to_string()
        }
        None => format!("{:.2}", amount),
    }
}

/// Masks a full account number down to its last four digits.
///
/// Numbers of four characters or fewer are shown as `**** n`.
pub fn mask_account_number(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    if chars.len() <= 4 {
        return format!("**** {}", number);
    }
    let last_four: String = chars[chars.len() - 4..].iter().collect();
    format!("•••• {}", last_four)
}

pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::Short => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        DateStyle::Medium => format!(
            "{} {}, {}",
            month_label(date.month()),
            date.day(),
            date.year()
        ),
    }
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}
