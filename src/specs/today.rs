// src/specs/today.rs
//! The featured-quote fragment ("Wikiquote:Quote of the day").
//!
//! Quote: first table-body whose first cell has text. Author: the link inside the
//! first `font-size:smaller` cell of that same table-body. Date: the "Today is …;"
//! sentence anywhere on the page. Each field falls back independently.

use crate::core::dates::parse_today_sentence;
use crate::core::dom::Doc;
use crate::core::sanitize::normalize_ws;
use crate::record::TodayQuote;

pub fn parse_doc(html: &str) -> TodayQuote {
    let doc = Doc::parse(html);
    let mut out = TodayQuote {
        featured_date: parse_today_sentence(&doc.page_text()),
        ..TodayQuote::default()
    };
    if out.featured_date.is_none() {
        logw!("No 'Today is …;' sentence found; featured date unknown");
    }

    // The first block with quote text decides both quote and author.
    for tbody in doc.find_all("tbody") {
        let Some(quote) = first_cell_text(&doc, tbody) else {
            continue;
        };
        out.quote = quote;
        if let Some(author) = smaller_cell_link(&doc, tbody) {
            out.author = author;
        }
        break;
    }

    logd!(
        "Today: quote found = {}, author found = {}, complete = {}",
        out.has_quote(), out.has_author(), out.is_complete()
    );
    out
}

fn first_cell_text(doc: &Doc, tbody: usize) -> Option<String> {
    let td = doc.first_descendant_of_tag(tbody, "td")?;
    nonempty!(normalize_ws(&doc.strings(td).join(" ")))
}

fn smaller_cell_link(doc: &Doc, tbody: usize) -> Option<String> {
    let cell = doc
        .descendants_of_tag(tbody, "td")
        .find(|&td| doc.attr(td, "style").is_some_and(is_smaller_font))?;
    let link = doc.first_descendant_of_tag(cell, "a")?;
    nonempty!(doc.text(link))
}

/// `font-size:smaller;` modulo spacing, case and the trailing semicolon.
fn is_smaller_font(style: &str) -> bool {
    let compact: String = style.chars().filter(|c| !c.is_whitespace()).collect();
    compact.to_ascii_lowercase().trim_end_matches(';') == "font-size:smaller"
}
