use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::FieldError;

/// Stored when a date cell can't be read. Sorts before every real date.
pub const UNPARSED_DATE: NaiveDate = NaiveDate::MIN;

/// The form typed into the history page's date-range fields.
pub const QUERY_DATE_FORMAT: &str = "%m/%d/%Y";

// `%b` only reads three-letter names, so full names get their own formats.
const TEXT_FORMATS: &[&str] = &[
    "%b %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
    "%d %b, %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
];

struct Patterns {
    ordinal: Regex,
    time_of_day: Regex,
    mdy: Regex,
    ymd: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        ordinal: Regex::new(r"(?i)\b(\d{1,2})(st|nd|rd|th)\b").expect("ordinal pattern"),
        time_of_day: Regex::new(r"(?:T|\s+)\d{1,2}:\d{2}.*$").expect("time pattern"),
        mdy: Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{2}|\d{4})$").expect("mdy pattern"),
        ymd: Regex::new(r"^(\d{4})[/-](\d{1,2})[/-](\d{1,2})$").expect("ymd pattern"),
    })
}

/// Two-digit years pivot at 69: `68` is 2068, `69` is 1969.
fn expand_year(raw: &str) -> Option<i32> {
    let y: i32 = raw.parse().ok()?;
    Some(match raw.len() {
        2 if y < 69 => 2000 + y,
        2 => 1900 + y,
        _ => y,
    })
}

fn numeric_date(value: &str) -> Option<NaiveDate> {
    let p = patterns();
    if let Some(caps) = p.mdy.captures(value) {
        let m: u32 = caps[1].parse().ok()?;
        let d: u32 = caps[2].parse().ok()?;
        let y = expand_year(&caps[3])?;
        return NaiveDate::from_ymd_opt(y, m, d);
    }
    if let Some(caps) = p.ymd.captures(value) {
        let y: i32 = caps[1].parse().ok()?;
        let m: u32 = caps[2].parse().ok()?;
        let d: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(y, m, d);
    }
    None
}

/// Read the date formats the bank (and most US statements) print.
///
/// Accepts `01/02/2023`, `1/2/23`, `01-02-2023`, `2023-01-02`,
/// `2023/01/02`, `Jan 2, 2023`, `January 2nd, 2023`, `2 Jan 2023` and
/// `2 January 2023`.
/// A trailing time of day is ignored.
pub fn parse_date(raw: &str) -> Result<NaiveDate, FieldError> {
    let p = patterns();
    let trimmed = raw.trim();
    let value = p.time_of_day.replace(trimmed, "");
    let value = p.ordinal.replace_all(&value, "$1");
    let value = value.trim();

    if let Some(date) = numeric_date(value) {
        return Ok(date);
    }
    TEXT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .ok_or_else(|| FieldError::DateParse(trimmed.to_string()))
}

pub fn format_query_date(date: NaiveDate) -> String {
    date.format(QUERY_DATE_FORMAT).to_string()
}
