// src/specs/legacy.rs
//! Archive pages up to January 2012.
//!
//! ```html
//! <dl><dt>January 1</dt></dl>
//! <table><tr><td>…</td><td>…</td><td>Life is short. ~ Seneca</td></tr></table>
//! ```
//! The first table after each date term holds the entry; its third cell is
//! `quote ~ author`, sometimes followed by the "Past months" footer.

use super::{ Entry, extract_anchored };
use crate::core::dom::Doc;
use crate::core::sanitize::{ normalize_ws, split_attribution };
use crate::record::QuoteRecord;

const QUOTE_CELL: usize = 2;

pub fn parse_doc(html: &str, year: &str) -> Option<Vec<QuoteRecord>> {
    extract_anchored(html, year, "legacy", entry_for)
}

fn entry_for(doc: &Doc, dt: usize) -> Entry {
    let Some(table) = doc.next_of_tag(dt, "table") else {
        logd!("No table found after date term");
        return Entry::default();
    };

    let Some(cell) = doc.descendants_of_tag(table, "td").nth(QUOTE_CELL) else {
        return Entry::default();
    };

    let content = normalize_ws(&doc.text(cell));
    let (quote, author) = split_attribution(&content);
    Entry::new(quote, author)
}
