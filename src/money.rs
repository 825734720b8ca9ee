//! Currency text <-> integer minor units.
//!
//! The bank always renders two decimal places, so stripping the decimal
//! point yields pennies directly. A source that printed any other number of
//! fractional digits would be silently mis-scaled.

use crate::error::MoneyError;

const STRIPPED: &[char] = &['$', ',', '.'];

/// Parse `"$1,234.56"` into `123456`.
pub fn parse_money(raw: &str) -> Result<i64, MoneyError> {
    let digits: String = raw.chars().filter(|c| !STRIPPED.contains(c)).collect();
    digits
        .parse::<i64>()
        .map_err(|source| MoneyError::NotANumber {
            text: raw.to_string(),
            source,
        })
}

/// Format minor units with thousands separators: `$1,234.56`.
pub fn format_money(minor: i64) -> String {
    let negative = minor < 0;
    let abs = minor.unsigned_abs();
    let int_part = (abs / 100).to_string();

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-${with_commas}.{:02}", abs % 100)
    } else {
        format!("${with_commas}.{:02}", abs % 100)
    }
}

/// Plain decimal rendering for exports: `-12.50`.
pub fn decimal(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
