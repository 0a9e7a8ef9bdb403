// src/config/consts.rs

// Today-page sentinels
pub const QUOTE_NOT_FOUND: &str = "Quote_not_found";
pub const AUTHOR_NOT_FOUND: &str = "Author_not_found";

// Placeholders for null fields at assembly time
pub const UNKNOWN_AUTHOR: &str = "Unknown";
pub const MISSING_QUOTE: &str = "(No quote text available)";

// Extraction
pub const PAST_MONTHS_MARKER: &str = "Past months";
pub const MIN_FALLBACK_QUOTE_CHARS: usize = 10; // quotes found past a nav paragraph must be longer
pub const FINGERPRINT_HEX_LEN: usize = 32;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "quotes";
pub const EXPORT_HEADERS: [&str; 4] = ["Id", "Date", "Quote", "Author"];

// Concurrency
pub const WORKERS: usize = 4;
