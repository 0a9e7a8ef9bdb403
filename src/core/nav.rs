// src/core/nav.rs
//
// Archive pages carry "view - talk - history" style edit links right next to the
// content. Anything containing one of these tokens is never quote or author text.

pub const NAVIGATION_TOKENS: &[&str] = &[
    "view",
    "talk",
    "discussion",
    "history",
    "view-talk",
    "view-discussion",
    "view-history",
    "talk-history",
    "view-talk-history",
    "view-discussion-history",
];

/// Case-insensitive substring match against `NAVIGATION_TOKENS`.
pub fn is_navigation_text(candidate: &str) -> bool {
    let lc = candidate.to_lowercase();
    NAVIGATION_TOKENS.iter().any(|t| lc.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_edit_links() {
        assert!(is_navigation_text("view talk history"));
        assert!(is_navigation_text("View-Discussion-History"));
        assert!(is_navigation_text("(talk)"));
    }

    #[test]
    fn plain_text_passes() {
        assert!(!is_navigation_text("Life is short."));
        assert!(!is_navigation_text(""));
    }
}
