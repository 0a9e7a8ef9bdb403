// src/record.rs
//
// Output shapes of the extraction engine. Records are plain values built fresh
// on every call; nothing here knows about pages, eras or storage.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::consts::{AUTHOR_NOT_FOUND, QUOTE_NOT_FOUND};

/// `YYYY-MM-DD` as composed from the page's year and a date label.
///
/// The loose date tier only checks digit shape, so this is kept as text;
/// `to_naive` gives the calendar date when it is a real one.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FeaturedDate(String);

impl FeaturedDate {
    pub fn compose(year: &str, month: u32, day: &str) -> Self {
        FeaturedDate(format!("{year}-{month:02}-{day:0>2}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl fmt::Display for FeaturedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One dated entry of a month-archive page.
/// `quote` and `author` are independently optional; both `None` still means the
/// date itself was found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuoteRecord {
    pub featured_date: FeaturedDate,
    pub quote: Option<String>,
    pub author: Option<String>,
}

impl QuoteRecord {
    pub fn new(featured_date: FeaturedDate, quote: Option<String>, author: Option<String>) -> Self {
        Self {
            featured_date,
            quote: quote.and_then(|q| nonempty!(q)),
            author: author.and_then(|a| nonempty!(a)),
        }
    }

    /// Date anchor resolved, content not.
    pub fn empty(featured_date: FeaturedDate) -> Self {
        Self { featured_date, quote: None, author: None }
    }

    pub fn is_empty(&self) -> bool {
        self.quote.is_none() && self.author.is_none()
    }
}

/// The currently featured quote. Missing text fields keep their sentinel; a
/// missing date stays `None` and must not be replaced by the system clock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodayQuote {
    pub quote: String,
    pub author: String,
    pub featured_date: Option<NaiveDate>,
}

impl Default for TodayQuote {
    fn default() -> Self {
        Self {
            quote: s!(QUOTE_NOT_FOUND),
            author: s!(AUTHOR_NOT_FOUND),
            featured_date: None,
        }
    }
}

impl TodayQuote {
    pub fn has_quote(&self) -> bool {
        self.quote != QUOTE_NOT_FOUND
    }

    pub fn has_author(&self) -> bool {
        self.author != AUTHOR_NOT_FOUND
    }

    pub fn is_complete(&self) -> bool {
        self.has_quote() && self.has_author() && self.featured_date.is_some()
    }
}
