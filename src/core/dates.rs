// src/core/dates.rs
//
// Date labels on archive pages ("January 5", "May 3rd", "june  7") and the
// "Today is Thursday, October 17, 2024;" sentence on the featured-quote page.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::record::FeaturedDate;

/// Leap year used only to validate month/day pairs; never appears in output.
const REFERENCE_YEAR: i32 = 2000;

static MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)\s+(\d+)").expect("invalid regex: month day")
});

static TODAY_IS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Today is ([^;]+);").expect("invalid regex: today is")
});

/// English month name → number.
pub fn month_number(name: &str) -> Option<u32> {
    let n = match name.to_lowercase().as_str() {
        "january" => 1,
        "february" => 2,
        "march" => 3,
        "april" => 4,
        "may" => 5,
        "june" => 6,
        "july" => 7,
        "august" => 8,
        "september" => 9,
        "october" => 10,
        "november" => 11,
        "december" => 12,
        _ => return None,
    };
    Some(n)
}

/// Resolve a "Month Day" label against `year`.
///
/// Strict first (calendar-checked month/day), then a loose `word digits` scan
/// that only checks digit shape. `None` means the caller skips this anchor.
pub fn parse_date_token(label: &str, year: &str) -> Option<FeaturedDate> {
    let label = label.trim();
    let year = year.trim();

    // chrono's %B also takes "Jan"; only full names count.
    let full_name = label.split_whitespace().next().is_some_and(|w| month_number(w).is_some());
    if full_name {
        if let Ok(d) = NaiveDate::parse_from_str(&format!("{label} {REFERENCE_YEAR}"), "%B %d %Y") {
            return Some(FeaturedDate::compose(year, d.month(), &d.day().to_string()));
        }
    }

    let caps = MONTH_DAY.captures(label)?;
    let (month_str, day_str) = (&caps[1], &caps[2]);
    let Some(month) = month_number(month_str) else {
        logd!("Could not map '{month_str}' to a month number");
        return None;
    };
    if !day_str.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(FeaturedDate::compose(year, month, day_str))
}

/// Find "Today is <Weekday, Month Day, Year>;" anywhere in the page text.
/// A weekday that disagrees with the calendar is ignored rather than rejected.
pub fn parse_today_sentence(page_text: &str) -> Option<NaiveDate> {
    let caps = TODAY_IS.captures(page_text)?;
    let raw = caps[1].trim();

    if let Ok(d) = NaiveDate::parse_from_str(raw, "%A, %B %d, %Y") {
        return Some(d);
    }
    let (_, without_weekday) = raw.split_once(',')?;
    NaiveDate::parse_from_str(without_weekday.trim(), "%B %d, %Y").ok()
}
