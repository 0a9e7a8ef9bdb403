// src/specs/mod.rs
//! # Page "specs"
//!
//! Each spec knows how to read one kind of Wikiquote page: the featured-quote
//! fragment (`today`) or a month archive in one of three markup eras
//! (`legacy`, `transitional`, `modern`).
//!
//! ## What lives here
//! - **Pure HTML reading** over `core::dom::Doc`: which element anchors a date,
//!   where its content region starts and stops, which cell or paragraph holds the
//!   quote and which holds the attribution.
//! - **Tolerant extraction**: a bad date label skips one anchor; a missing region
//!   yields a record with empty fields; only a page with no date anchors at all
//!   is rejected.
//!
//! ## What does **not** live here
//! - Fetching, caching or persistence.
//! - Choosing the era (`era::select_parser`), placeholders and ids (`store`).
//!
//! ## Archive contract
//! ```text
//! parse_doc(html, year) -> Option<Vec<QuoteRecord>>
//!   None       no <dt> anchors, or nothing resolved
//!   Some(v)    one record per resolved <dt>, in document order
//! ```
//! The era modules only supply the per-anchor content rule; the anchor loop
//! below is shared.

pub mod legacy;
pub mod modern;
pub mod today;
pub mod transitional;

use crate::core::dates::parse_date_token;
use crate::core::dom::Doc;
use crate::core::sanitize::normalize_ws;
use crate::record::QuoteRecord;

/// Quote and author found in one content region.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Entry {
    pub quote: Option<String>,
    pub author: Option<String>,
}

impl Entry {
    pub fn new(quote: Option<String>, author: Option<String>) -> Self {
        Self { quote, author }
    }
}

/// The shared anchor loop. `entry_for` receives the document and the index of
/// one `<dt>` and returns whatever content it can find.
pub(crate) fn extract_anchored<F>(html: &str, year: &str, era: &str, mut entry_for: F) -> Option<Vec<QuoteRecord>>
where
    F: FnMut(&Doc, usize) -> Entry,
{
    let doc = Doc::parse(html);
    let anchors = doc.find_all("dt");

    if anchors.is_empty() {
        logw!("No date elements found in the HTML content");
        return None;
    }
    logf!("Found {} date elements ({era} format)", anchors.len());

    let mut out = Vec::with_capacity(anchors.len());
    for dt in anchors {
        let label = normalize_ws(&doc.text(dt));
        if label.is_empty() {
            continue;
        }
        logd!("Processing date: {label}");

        let Some(date) = parse_date_token(&label, year) else {
            logd!("Could not parse date '{label}'");
            continue;
        };

        let Entry { quote, author } = entry_for(&doc, dt);
        logd!("Extracted quote for {date} by {}", author.as_deref().unwrap_or("unknown author"));
        out.push(QuoteRecord::new(date, quote, author));
    }

    if out.is_empty() {
        logw!("No valid quotes were extracted from the provided HTML content");
        return None;
    }

    logf!("Extracted {} quotes for {year} using {era} parser", out.len());
    Some(out)
}
