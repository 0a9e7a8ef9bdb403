// src/specs/transitional.rs
//! Archive pages of February and March 2012.
//!
//! ```html
//! <dl><dt>February 3</dt></dl>
//! <p>Quote text</p>
//! <p><small>~ Author ~</small></p>
//! ```
//! The paragraph after the date term is the quote; the `<small>` inside the
//! paragraph after that is the attribution.

use super::{ Entry, extract_anchored };
use crate::core::dom::Doc;
use crate::core::sanitize::{ after_first_tilde, normalize_ws, split_attribution };
use crate::record::QuoteRecord;

pub fn parse_doc(html: &str, year: &str) -> Option<Vec<QuoteRecord>> {
    extract_anchored(html, year, "transitional", entry_for)
}

fn entry_for(doc: &Doc, dt: usize) -> Entry {
    let Some(quote_p) = doc.next_of_tag(dt, "p") else {
        return loose_entry(doc, dt);
    };

    let quote = nonempty!(normalize_ws(&doc.text(quote_p)));

    let author = doc
        .next_of_tag(quote_p, "p")
        .and_then(|p| doc.first_descendant_of_tag(p, "small"))
        .and_then(|small| nonempty!(after_first_tilde(&normalize_ws(&doc.text(small)))));

    Entry::new(quote, author)
}

/// No paragraph anywhere after the term: read whatever element follows it,
/// unless that is already the next date.
fn loose_entry(doc: &Doc, dt: usize) -> Entry {
    match doc.next_element_after(dt) {
        Some(next) if !doc.is_tag(next, "dt") => {
            let text = normalize_ws(&doc.text(next));
            let (quote, author) = split_attribution(&text);
            Entry::new(quote, author)
        }
        _ => Entry::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_and_small_attribution_in_sibling_paragraphs() {
        let html = r#"
            <dl><dt>February 3</dt></dl>
            <p>Whatever you are, be a good one.</p>
            <p><small>~ <a href="/wiki/Abraham_Lincoln">Abraham Lincoln</a> ~</small></p>
            <dl><dt>February 4</dt></dl>
            <p>Second quote.</p>
            <p><small>~ Second Author ~</small></p>
        "#;
        let out = parse_doc(html, "2012").unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].featured_date.as_str(), "2012-02-03");
        assert_eq!(out[0].quote.as_deref(), Some("Whatever you are, be a good one."));
        assert_eq!(out[0].author.as_deref(), Some("Abraham Lincoln"));
        assert_eq!(out[1].author.as_deref(), Some("Second Author"));
    }

    #[test]
    fn paragraph_without_small_is_not_an_author() {
        let html = r#"
            <dl><dt>March 1</dt></dl>
            <p>Only the quote.</p>
            <p>~ Not confirmed ~</p>
        "#;
        let out = parse_doc(html, "2012").unwrap();
        assert_eq!(out[0].quote.as_deref(), Some("Only the quote."));
        assert_eq!(out[0].author, None);
    }

    #[test]
    fn text_after_small_is_not_author() {
        let html = r#"
            <dl><dt>February 9</dt></dl>
            <p>Luck is what happens when preparation meets opportunity.</p>
            <p><small>~ Seneca ~</small> [1] Letters</p>
        "#;
        let out = parse_doc(html, "2012").unwrap();
        assert_eq!(out[0].author.as_deref(), Some("Seneca"));
    }

    #[test]
    fn no_paragraph_falls_back_to_next_element() {
        let html = r#"<dl><dt>March 2</dt></dl><div>Stay hungry. ~ Steve Jobs</div>"#;
        let out = parse_doc(html, "2012").unwrap();
        assert_eq!(out[0].quote.as_deref(), Some("Stay hungry."));
        assert_eq!(out[0].author.as_deref(), Some("Steve Jobs"));
    }

    #[test]
    fn absent_region_yields_empty_record() {
        let out = parse_doc("<dl><dt>March 5</dt></dl>", "2012").unwrap();
        assert_eq!(out.len(), 1);
        assert!(out[0].is_empty());
    }
}
