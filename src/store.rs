// src/store.rs
//
// Assembly of extracted records into storable quotes: placeholders for missing
// fields, a content fingerprint as id, de-duplication, and the tabular shape
// the exporters consume.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::config::consts::{EXPORT_HEADERS, FINGERPRINT_HEX_LEN, MISSING_QUOTE, UNKNOWN_AUTHOR};
use crate::record::{QuoteRecord, TodayQuote};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StoredQuote {
    pub id: String,
    pub featured_date: Option<String>,
    pub quote: String,
    pub author: String,
}

impl StoredQuote {
    /// Archive record: null author becomes "Unknown", null quote a placeholder.
    pub fn from_record(record: &QuoteRecord) -> Self {
        let quote = record.quote.clone().unwrap_or_else(|| s!(MISSING_QUOTE));
        let author = record.author.clone().unwrap_or_else(|| s!(UNKNOWN_AUTHOR));
        let date = record.featured_date.as_str();

        Self {
            id: fingerprint(&[&quote, &author, date]),
            featured_date: Some(s!(date)),
            quote,
            author,
        }
    }

    /// Featured quote: sentinels are kept as they are.
    pub fn from_today(today: &TodayQuote) -> Self {
        Self {
            id: fingerprint(&[&today.quote, &today.author]),
            featured_date: today.featured_date.map(|d| d.format("%Y-%m-%d").to_string()),
            quote: today.quote.clone(),
            author: today.author.clone(),
        }
    }

    pub fn date_str(&self) -> &str {
        self.featured_date.as_deref().unwrap_or("")
    }
}

/// BLAKE3 of the `_`-joined parts, shortened to a fixed hex length.
pub fn fingerprint(parts: &[&str]) -> String {
    let joined = parts.join("_");
    let hex = blake3::hash(joined.as_bytes()).to_hex();
    hex.as_str()[..FINGERPRINT_HEX_LEN].to_string()
}

pub fn assemble(records: &[QuoteRecord]) -> Vec<StoredQuote> {
    records.iter().map(StoredQuote::from_record).collect()
}

/// Keeps the first quote per id. Repeated dates are only reported.
pub fn dedup(quotes: Vec<StoredQuote>) -> Vec<StoredQuote> {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_dates: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(quotes.len());

    for q in quotes {
        if !seen_ids.insert(q.id.clone()) {
            logd!("Dropping duplicate quote {} ({})", q.id, q.date_str());
            continue;
        }
        if let Some(date) = &q.featured_date {
            let n = seen_dates.entry(date.clone()).or_insert(0);
            *n += 1;
            if *n == 2 {
                logw!("Several different quotes share the date {date}");
            }
        }
        out.push(q);
    }
    out
}

/// Headers + rows, ready for the delimited exporters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn from_quotes(quotes: &[StoredQuote]) -> Self {
        let headers = EXPORT_HEADERS.iter().map(|h| s!(*h)).collect();
        let rows = quotes
            .iter()
            .map(|q| vec![q.id.clone(), s!(q.date_str()), q.quote.clone(), q.author.clone()])
            .collect();
        Self { headers: Some(headers), rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FeaturedDate;
    use chrono::NaiveDate;

    fn rec(date: &str, quote: Option<&str>, author: Option<&str>) -> QuoteRecord {
        let (month, day) = date.split_once('-').unwrap();
        QuoteRecord::new(
            FeaturedDate::compose("2011", month.parse().unwrap(), day),
            quote.map(str::to_string),
            author.map(str::to_string),
        )
    }

    #[test]
    fn placeholders_fill_missing_fields() {
        let q = StoredQuote::from_record(&rec("01-01", None, None));
        assert_eq!(q.quote, "(No quote text available)");
        assert_eq!(q.author, "Unknown");
        assert_eq!(q.featured_date.as_deref(), Some("2011-01-01"));
        assert_eq!(q.id.len(), 32);
    }

    #[test]
    fn fingerprint_is_deterministic_and_order_sensitive() {
        assert_eq!(fingerprint(&["a", "b"]), fingerprint(&["a", "b"]));
        assert_ne!(fingerprint(&["a", "b"]), fingerprint(&["b", "a"]));
        assert!(fingerprint(&["x"]).chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn same_quote_on_other_day_is_a_different_id() {
        let a = StoredQuote::from_record(&rec("01-01", Some("Q"), Some("A")));
        let b = StoredQuote::from_record(&rec("01-02", Some("Q"), Some("A")));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn today_keeps_sentinels() {
        let t = TodayQuote { featured_date: NaiveDate::from_ymd_opt(2024, 10, 17), ..TodayQuote::default() };
        let q = StoredQuote::from_today(&t);
        assert_eq!(q.quote, "Quote_not_found");
        assert_eq!(q.author, "Author_not_found");
        assert_eq!(q.featured_date.as_deref(), Some("2024-10-17"));
        assert_eq!(q.id, fingerprint(&["Quote_not_found", "Author_not_found"]));
    }

    #[test]
    fn dedup_drops_repeated_ids_only() {
        let quotes = assemble(&[
            rec("01-01", Some("Q1"), Some("A")),
            rec("01-01", Some("Q1"), Some("A")),
            rec("01-01", Some("Q2"), Some("B")),
        ]);
        let out = dedup(quotes);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].quote, "Q1");
        assert_eq!(out[1].quote, "Q2");
    }

    #[test]
    fn dataset_columns() {
        let ds = DataSet::from_quotes(&assemble(&[rec("03-09", Some("Q"), None)]));
        assert_eq!(ds.headers.as_ref().unwrap()[1], "Date");
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.rows[0][1..], [s!("2011-03-09"), s!("Q"), s!("Unknown")]);
    }
}
