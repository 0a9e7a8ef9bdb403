// src/lib.rs
//! Quote-of-the-day extraction from Wikiquote pages.
//!
//! The engine (`specs`, `era`, `core`) turns the HTML of one page into records;
//! `store`, `runner` and `file` assemble, batch and export them.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod era;
pub mod error;
pub mod file;
pub mod progress;
pub mod record;
pub mod runner;
pub mod specs;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use crate::core::dates::parse_date_token;
pub use crate::core::nav::is_navigation_text;
pub use crate::core::sanitize::{ normalize_ws, strip_reference_markers };
pub use era::{ ArchiveHint, Era, select_parser };
pub use error::{ Error, Result };
pub use record::{ FeaturedDate, QuoteRecord, TodayQuote };

/// The featured quote of a "Wikiquote:Quote of the day" page. Never fails;
/// missing fields keep their "not found" sentinels.
pub fn extract_today(html: &str) -> TodayQuote {
    specs::today::parse_doc(html)
}

/// All dated quotes of the archive page for `month` `year`, using the era
/// `select_parser` picks.
pub fn extract_archive(html: &str, month: &str, year: &str) -> Option<Vec<QuoteRecord>> {
    select_parser(year, month).extract(html, year)
}
