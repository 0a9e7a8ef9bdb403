// src/era.rs
//! Markup eras of the month-archive pages and the dispatcher that picks one.
//!
//! | Era          | Pages                 |
//! |--------------|-----------------------|
//! | Legacy       | up to January 2012    |
//! | Transitional | February – March 2012 |
//! | Modern       | April 2012 onwards    |
//!
//! An unreadable year falls back to `Legacy`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ Error, Result };
use crate::record::QuoteRecord;
use crate::specs;

const TRANSITION_YEAR: i32 = 2012;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    Legacy,
    Transitional,
    Modern,
}

impl Era {
    pub const ALL: [Era; 3] = [Era::Legacy, Era::Transitional, Era::Modern];

    pub fn select(year: &str, month_name: &str) -> Era {
        let Ok(year) = year.trim().parse::<i32>() else {
            return Era::Legacy;
        };
        if year > TRANSITION_YEAR {
            return Era::Modern;
        }
        if year < TRANSITION_YEAR {
            return Era::Legacy;
        }
        match month_name.trim().to_lowercase().as_str() {
            "january" => Era::Legacy,
            "february" | "march" => Era::Transitional,
            _ => Era::Modern,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Era::Legacy => "legacy",
            Era::Transitional => "transitional",
            Era::Modern => "modern",
        }
    }

    /// Run this era's archive extractor. `None` = not a page of this era.
    pub fn extract(self, html: &str, year: &str) -> Option<Vec<QuoteRecord>> {
        match self {
            Era::Legacy => specs::legacy::parse_doc(html, year),
            Era::Transitional => specs::transitional::parse_doc(html, year),
            Era::Modern => specs::modern::parse_doc(html, year),
        }
    }
}

/// Which extractor handles the archive page for `month_name` `year`.
pub fn select_parser(year: &str, month_name: &str) -> Era {
    Era::select(year, month_name)
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Era {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Era::ALL
            .into_iter()
            .find(|e| e.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownEra(s!(s)))
    }
}

/// Month and year of one archive page, as used for dispatch and date composition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveHint {
    pub month: String,
    pub year: String,
}

impl ArchiveHint {
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        Self { month: month.into(), year: year.into() }
    }

    /// `"Wikiquote:Quote_of_the_day/January_2012"`, a full URL, or a saved file
    /// such as `pages/May 2013.html` → (month, year).
    pub fn from_page_name(name: &str) -> Result<Self> {
        let last = name
            .trim()
            .trim_end_matches('/')
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default();
        let last = strip_html_ext(last).replace(' ', "_");

        let parts: Vec<&str> = last.split('_').filter(|p| !p.is_empty()).collect();
        match parts.as_slice() {
            [month, .., year] => Ok(Self::new(*month, *year)),
            _ => Err(Error::PageName(s!(name))),
        }
    }

    pub fn era(&self) -> Era {
        Era::select(&self.year, &self.month)
    }
}

fn strip_html_ext(s: &str) -> &str {
    let lc = s.to_ascii_lowercase();
    for ext in [".html", ".htm"] {
        if lc.ends_with(ext) {
            return &s[..s.len() - ext.len()];
        }
    }
    s
}
