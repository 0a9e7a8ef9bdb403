// src/runner.rs
//
// Batch extraction over saved archive pages. One job per page, a fixed pool of
// worker threads pulling from a shared cursor, results put back in input order.

use std::{
    fs,
    panic::{self, AssertUnwindSafe},
    path::Path,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }},
    thread,
};

use crate::{
    config::options::ExtractOptions,
    era::{ ArchiveHint, Era },
    error::{ Error, Result },
    progress::Progress,
    record::{ QuoteRecord, TodayQuote },
    specs,
};

/// Raw bytes of one month-archive page and the month/year it covers.
#[derive(Clone, Debug)]
pub struct ArchivePage {
    pub name: String,
    pub html: Vec<u8>,
    pub hint: ArchiveHint,
}

impl ArchivePage {
    pub fn new(name: impl Into<String>, html: impl Into<Vec<u8>>, hint: ArchiveHint) -> Self {
        Self { name: name.into(), html: html.into(), hint }
    }

    /// Month and year taken from the page name.
    pub fn named(name: impl Into<String>, html: impl Into<Vec<u8>>) -> Result<Self> {
        let name = name.into();
        let hint = ArchiveHint::from_page_name(&name)?;
        Ok(Self::new(name, html, hint))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageResult {
    pub name: String,
    pub era: Era,
    /// `None`: the page yielded nothing usable.
    pub records: Option<Vec<QuoteRecord>>,
}

impl PageResult {
    pub fn record_count(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }
}

/// Read a saved page. Without `hint`, month and year come from the file name.
pub fn load_page(path: &Path, hint: Option<&ArchiveHint>) -> Result<ArchivePage> {
    let html = fs::read(path).map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
    let name = path.to_string_lossy().into_owned();
    let hint = match hint {
        Some(h) => h.clone(),
        None => ArchiveHint::from_page_name(&name)?,
    };
    Ok(ArchivePage::new(name, html, hint))
}

/// Extract every page on `opts.workers` threads. One result per page, in input order.
pub fn extract_pages(
    pages: Vec<ArchivePage>,
    opts: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<PageResult> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages.len());
    }
    if pages.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No pages to extract.");
            p.finish();
        }
        return Vec::new();
    }

    let pages = Arc::new(pages);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<(usize, PageResult)>();

    let workers = opts.workers.min(pages.len()).max(1);
    let line = format!("Extracting {} pages on {workers} workers", pages.len());
    match progress.as_deref_mut() {
        Some(p) => p.log(&line),
        None => logd!("{line}"),
    }

    for _ in 0..workers {
        let pages = Arc::clone(&pages);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();
        let opts = opts.clone();

        thread::spawn(
            move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    if i >= pages.len() {
                        break;
                    }
                    let result = extract_one(&pages[i], &opts);
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                }
            }
        );
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results
    let mut slots: Vec<Option<PageResult>> = vec![None; pages.len()];
    for (i, result) in res_rx.iter() {
        if let Some(p) = progress.as_deref_mut() {
            match result.records.as_ref() {
                Some(records) => p.item_done(&result.name, records.len()),
                None => p.item_failed(&result.name),
            }
        }
        slots[i] = Some(result);
    }

    let results: Vec<PageResult> = slots
        .into_iter()
        .enumerate()
        .map(|(i, slot)| slot.unwrap_or_else(|| {
            let page = &pages[i];
            loge!("Page {}: worker stopped before reporting", page.name);
            PageResult { name: page.name.clone(), era: opts.era_for(hint_for(page, opts)), records: None }
        }))
        .collect();

    let total: usize = results.iter().map(PageResult::record_count).sum();
    logf!("Extracted {total} records from {} pages", results.len());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    results
}

fn hint_for<'a>(page: &'a ArchivePage, opts: &'a ExtractOptions) -> &'a ArchiveHint {
    opts.hint.as_ref().unwrap_or(&page.hint)
}

/// Extract one page. Non-UTF-8 bytes and extractor panics both count as a page
/// with no records.
pub fn extract_one(page: &ArchivePage, opts: &ExtractOptions) -> PageResult {
    let hint = hint_for(page, opts);
    let era = opts.era_for(hint);

    let records = match std::str::from_utf8(&page.html) {
        Ok(html) => {
            logd!("Page {}: {} {} → {era} parser", page.name, hint.month, hint.year);
            match panic::catch_unwind(AssertUnwindSafe(|| era.extract(html, &hint.year))) {
                Ok(records) => records,
                Err(_) => {
                    loge!("Page {}: extractor panicked", page.name);
                    None
                }
            }
        }
        Err(e) => {
            logw!("Page {}: not valid UTF-8 ({e})", page.name);
            None
        }
    };

    PageResult { name: page.name.clone(), era, records }
}

/// Read a saved featured-quote page. Undecodable bytes give the all-sentinel record.
pub fn extract_today_file(path: &Path) -> Result<TodayQuote> {
    let bytes = fs::read(path).map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
    match String::from_utf8(bytes) {
        Ok(html) => Ok(specs::today::parse_doc(&html)),
        Err(e) => {
            logw!("{}: not valid UTF-8 ({e})", path.display());
            Ok(TodayQuote::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Progress;

    fn legacy_page(day: u32, quote: &str) -> String {
        format!(
            "<dl><dt>January {day}</dt></dl>\
             <table><tr><td></td><td></td><td>{quote} ~ Someone</td></tr></table>"
        )
    }

    #[derive(Default)]
    struct Tally {
        total: usize,
        lines: Vec<String>,
        done: Vec<(String, usize)>,
        failed: Vec<String>,
        finished: bool,
    }

    impl Progress for Tally {
        fn begin(&mut self, total: usize) { self.total = total; }
        fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
        fn item_done(&mut self, page: &str, records: usize) { self.done.push((s!(page), records)); }
        fn item_failed(&mut self, page: &str) { self.failed.push(s!(page)); }
        fn finish(&mut self) { self.finished = true; }
    }

    #[test]
    fn results_keep_input_order() {
        let pages: Vec<ArchivePage> = (1..=9)
            .map(|d| ArchivePage::new(format!("p{d}"), legacy_page(d, &format!("Quote {d}.")), ArchiveHint::new("January", "2010")))
            .collect();
        let opts = ExtractOptions { workers: 3, ..ExtractOptions::default() };

        let out = extract_pages(pages, &opts, None);
        assert_eq!(out.len(), 9);
        for (i, r) in out.iter().enumerate() {
            assert_eq!(r.name, format!("p{}", i + 1));
            assert_eq!(r.era, Era::Legacy);
            let recs = r.records.as_ref().unwrap();
            assert_eq!(recs[0].quote.as_deref(), Some(format!("Quote {}.", i + 1).as_str()));
        }
    }

    #[test]
    fn bad_pages_fail_alone() {
        let hint = ArchiveHint::new("January", "2010");
        let pages = vec![
            ArchivePage::new("good", legacy_page(1, "Fine."), hint.clone()),
            ArchivePage::new("binary", vec![0xff, 0xfe, 0x00], hint.clone()),
            ArchivePage::new("undated", "<p>nothing here</p>", hint),
        ];
        let mut tally = Tally::default();
        let out = extract_pages(pages, &ExtractOptions::default(), Some(&mut tally));

        assert_eq!(out[0].record_count(), 1);
        assert_eq!(out[1].records, None);
        assert_eq!(out[2].records, None);
        assert_eq!(tally.total, 3);
        assert_eq!(tally.lines, vec![s!("Extracting 3 pages on 3 workers")]);
        assert_eq!(tally.done, vec![(s!("good"), 1)]);
        assert_eq!(tally.failed.len(), 2);
        assert!(tally.finished);
    }

    #[test]
    fn overrides_apply_to_every_page() {
        let page = ArchivePage::new("x", legacy_page(4, "Q."), ArchiveHint::new("January", "2010"));
        let opts = ExtractOptions {
            hint: Some(ArchiveHint::new("January", "2009")),
            ..ExtractOptions::default()
        };
        let r = extract_one(&page, &opts);
        assert_eq!(r.records.unwrap()[0].featured_date.as_str(), "2009-01-04");

        let opts = ExtractOptions { era: Some(Era::Modern), ..ExtractOptions::default() };
        assert_eq!(extract_one(&page, &opts).era, Era::Modern);
    }

    #[test]
    fn empty_batch() {
        let mut tally = Tally::default();
        assert!(extract_pages(Vec::new(), &ExtractOptions::default(), Some(&mut tally)).is_empty());
        assert_eq!(tally.lines, vec![s!("No pages to extract.")]);
        assert!(tally.finished);
    }

    #[test]
    fn load_page_derives_hint_from_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("February_2012.html");
        fs::write(&path, "<dl><dt>February 3</dt></dl><p>Q</p>").unwrap();

        let page = load_page(&path, None).unwrap();
        assert_eq!(page.hint, ArchiveHint::new("February", "2012"));

        let forced = ArchiveHint::new("May", "2015");
        assert_eq!(load_page(&path, Some(&forced)).unwrap().hint, forced);

        assert!(matches!(load_page(&dir.path().join("missing.html"), None), Err(Error::Read { .. })));
    }
}
