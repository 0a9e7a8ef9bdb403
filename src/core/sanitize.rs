// src/core/sanitize.rs
//
// Text transforms shared by every extractor. All of them are total: empty in,
// empty out, no failure mode. The tilde helpers are order-sensitive; callers
// split first, then strip reference markers, then filter navigation text.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::PAST_MONTHS_MARKER;

static REFERENCE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[\[(][^\])]*[\])]").expect("invalid regex: reference marker")
});

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove `[...]` / `(...)` annotations, then any leftover tildes at the ends.
/// `"Seneca [1] ~"` → `"Seneca"`.
pub fn strip_reference_markers(s: &str) -> String {
    let stripped = REFERENCE_MARKER.replace_all(s, "");
    trim_tildes(&stripped)
}

fn trim_tildes(s: &str) -> String {
    s.trim_matches(|c: char| c == '~' || c.is_whitespace()).to_string()
}

/// Cut everything from the archive's "Past months" footer onwards.
pub fn cut_footer(s: &str) -> &str {
    match s.find(PAST_MONTHS_MARKER) {
        Some(i) => &s[..i],
        None => s,
    }
}

/// `"quote ~ author"` → (quote, author) on the first tilde.
/// The author side loses the footer and reference markers; no tilde means no author.
pub fn split_attribution(s: &str) -> (Option<String>, Option<String>) {
    match s.split_once('~') {
        Some((quote, rest)) => {
            let author = strip_reference_markers(cut_footer(rest));
            (nonempty!(quote), nonempty!(author))
        }
        None => (nonempty!(s), None),
    }
}

/// Text after the first tilde with trailing tildes dropped; the whole text if
/// there is no tilde.
pub fn after_first_tilde(s: &str) -> String {
    match s.split_once('~') {
        Some((_, rest)) => rest.trim().trim_end_matches('~').trim().to_string(),
        None => s.trim().to_string(),
    }
}

/// Attribution inside a `<small>` element:
/// `"~ Name ~"` → middle, `"~ Name"` / `"Name ~"` → the non-empty side,
/// no tilde → whole text.
pub fn author_between_tildes(s: &str) -> String {
    if !s.contains('~') {
        return s.trim().to_string();
    }
    let parts: Vec<&str> = s.split('~').collect();
    if parts.len() >= 3 {
        parts[1].trim().to_string()
    } else if parts[0].trim().is_empty() {
        parts[1].trim().to_string()
    } else {
        parts[0].trim().to_string()
    }
}

/// Turn a page name into a safe file stem.
pub fn sanitize_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '_' { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' { out.push(ch); last_us = false; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_collapses() {
        assert_eq!(normalize_ws("  Life \n\t is\u{a0}short.  "), "Life is short.");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn reference_markers_and_tildes() {
        assert_eq!(strip_reference_markers("Seneca [1]"), "Seneca");
        assert_eq!(strip_reference_markers("Mark Twain (attributed) ~"), "Mark Twain");
        assert_eq!(strip_reference_markers("~ Plato"), "Plato");
        assert_eq!(strip_reference_markers(""), "");
    }

    #[test]
    fn attribution_splits_on_first_tilde() {
        assert_eq!(
            split_attribution("Life is short. ~ Seneca"),
            (Some(s!("Life is short.")), Some(s!("Seneca")))
        );
        assert_eq!(
            split_attribution("Know thyself. ~ Socrates [2] ~ Past months: January"),
            (Some(s!("Know thyself.")), Some(s!("Socrates")))
        );
        assert_eq!(split_attribution("No author here"), (Some(s!("No author here")), None));
        assert_eq!(split_attribution("~"), (None, None));
    }

    #[test]
    fn after_first_tilde_trims_trailing() {
        assert_eq!(after_first_tilde("~ Oscar Wilde ~"), "Oscar Wilde");
        assert_eq!(after_first_tilde("Oscar Wilde"), "Oscar Wilde");
    }

    #[test]
    fn small_attribution_rules() {
        assert_eq!(author_between_tildes("~ Mark Twain ~"), "Mark Twain");
        assert_eq!(author_between_tildes("~ Mark Twain"), "Mark Twain");
        assert_eq!(author_between_tildes("Mark Twain ~"), "Mark Twain");
        assert_eq!(author_between_tildes("Mark Twain"), "Mark Twain");
    }

    #[test]
    fn stems_are_filesystem_safe() {
        assert_eq!(sanitize_stem("January 2012", "page"), "January_2012");
        assert_eq!(sanitize_stem("Wikiquote:QOTD/May__2013", "page"), "WikiquoteQOTDMay_2013");
        assert_eq!(sanitize_stem("///", "page_3"), "page_3");
    }
}
