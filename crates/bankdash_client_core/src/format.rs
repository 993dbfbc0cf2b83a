//! Display formatting for amounts and dates (en-US, USD, UTC).

use crate::models::TransactionType;
use chrono::{DateTime, NaiveDate, Utc};

/// `1234.5` -> `$1,234.50`, `-3` -> `-$3.00`.
///
/// Digits come from the float's decimal expansion, never an integer cast.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let nonzero = fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if amount < 0.0 && nonzero { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), frac)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// `2024-01-05T15:07:00Z` -> `Jan 5, 2024, 03:07 PM`. Unparseable input is returned as-is.
pub fn format_date(date: &str) -> String {
    match parse_timestamp(date) {
        Some(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => date.to_string(),
    }
}

/// `YYYY-MM-DD` for date inputs; today when `date` is absent or unparseable.
pub fn input_date_string(date: Option<&str>) -> String {
    date.and_then(parse_timestamp)
        .unwrap_or_else(Utc::now)
        .format("%Y-%m-%d")
        .to_string()
}

pub fn format_transaction_amount(amount: f64, kind: TransactionType) -> String {
    match kind {
        TransactionType::Expense => format!("-{}", format_currency(amount.abs())),
        TransactionType::Income => format!("+{}", format_currency(amount.abs())),
        TransactionType::Transfer => format_currency(amount),
    }
}
