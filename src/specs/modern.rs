// src/specs/modern.rs
//! Archive pages from April 2012 onwards.
//!
//! Each date term owns every `<p>` up to the next `<dt>` or `<hr>` (whichever
//! comes first; end of document if neither does). Inside that region:
//! - the quote is the first paragraph, unless it is an edit-link line, in which
//!   case the first later non-navigation paragraph of reasonable length;
//! - the author is the first `<small>` in any region paragraph, read with the
//!   tilde rules in `author_between_tildes`;
//! - with no `<small>` at all, a `quote ~ author` paragraph is split instead.

use std::ops::Range;

use super::{ Entry, extract_anchored };
use crate::config::consts::MIN_FALLBACK_QUOTE_CHARS;
use crate::core::dom::Doc;
use crate::core::nav::is_navigation_text;
use crate::core::sanitize::{ author_between_tildes, normalize_ws, strip_reference_markers };
use crate::record::QuoteRecord;

pub fn parse_doc(html: &str, year: &str) -> Option<Vec<QuoteRecord>> {
    extract_anchored(html, year, "modern", entry_for)
}

/// `[dt + 1, boundary)` where boundary is the nearer of the next `<dt>` and `<hr>`.
pub(crate) fn region(doc: &Doc, dt: usize) -> Range<usize> {
    let end = [doc.next_of_tag(dt, "dt"), doc.next_of_tag(dt, "hr")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(doc.len());
    dt + 1..end
}

fn entry_for(doc: &Doc, dt: usize) -> Entry {
    let paragraphs: Vec<usize> = doc.tags_in(region(doc, dt), "p").collect();
    if paragraphs.is_empty() {
        logw!("No paragraphs found after date term");
        return Entry::default();
    }

    let texts: Vec<String> = paragraphs.iter().map(|&p| normalize_ws(&doc.text(p))).collect();
    let mut quote = pick_quote(&texts);
    let mut author = small_author(doc, &paragraphs);

    if author.is_none() {
        let split = quote
            .as_deref()
            .and_then(|q| q.split_once('~'))
            .map(|(head, rest)| (nonempty!(head), nonempty!(rest)));
        if let Some((head, rest)) = split {
            quote = head;
            author = rest;
        }
    }

    let author = author
        .map(|a| strip_reference_markers(&a))
        .and_then(|a| nonempty!(a))
        .filter(|a| {
            let nav = is_navigation_text(a);
            if nav { logd!("Dropping navigation text as author: {a}"); }
            !nav
        });

    Entry::new(quote, author)
}

fn pick_quote(texts: &[String]) -> Option<String> {
    let first = texts.first()?;
    if !is_navigation_text(first) {
        return nonempty!(first);
    }
    logd!("Skipping navigation element: {first}");

    texts[1..]
        .iter()
        .find(|t| !is_navigation_text(t) && t.chars().count() > MIN_FALLBACK_QUOTE_CHARS)
        .cloned()
}

fn small_author(doc: &Doc, paragraphs: &[usize]) -> Option<String> {
    paragraphs
        .iter()
        .find_map(|&p| doc.first_descendant_of_tag(p, "small"))
        .and_then(|small| nonempty!(author_between_tildes(&normalize_ws(&doc.text(small)))))
}
