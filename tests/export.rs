// tests/export.rs
use std::fs;

use wq_qotd::config::options::{ AppOptions, ExportFormat, ExportType, ExtractOptions };
use wq_qotd::era::ArchiveHint;
use wq_qotd::file;
use wq_qotd::runner::{ self, ArchivePage };

fn legacy(day: u32, quote: &str, author: &str) -> String {
    format!(
        "<dl><dt>January {day}</dt></dl>\
         <table><tr><td></td><td></td><td>{quote} ~ {author}</td></tr></table>"
    )
}

fn batch() -> Vec<runner::PageResult> {
    let pages = vec![
        ArchivePage::named("Wikiquote:Quote_of_the_day/January_2010", legacy(1, "Life is short.", "Seneca")).unwrap(),
        ArchivePage::named("January 2011.html", legacy(2, "Be brief, be bright.", "Anon")).unwrap(),
        ArchivePage::named("May_2015", "<p>not an archive</p>").unwrap(),
    ];
    runner::extract_pages(pages, &ExtractOptions::default(), None)
}

#[test]
fn single_csv_file_with_headers() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.export.include_headers = true;
    opts.export.set_path(dir.path().join("nested/all.txt").to_str().unwrap());

    let written = file::export_pages(&opts.export, &batch()).unwrap();
    assert_eq!(written, vec![dir.path().join("nested/all.csv")]);

    let text = fs::read_to_string(&written[0]).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Id,Date,Quote,Author");
    assert!(lines[1].ends_with(",2010-01-01,Life is short.,Seneca"));
    assert!(lines[2].ends_with(",2011-01-02,\"Be brief, be bright.\",Anon"));
}

#[test]
fn per_page_json_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.export.export_type = ExportType::PerPage;
    opts.export.format = ExportFormat::Json;
    opts.export.set_path(dir.path().to_str().unwrap());

    let written = file::export_pages(&opts.export, &batch()).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["January_2010.json", "January_2011.json"]);

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&written[0]).unwrap()).unwrap();
    assert_eq!(v[0]["featured_date"], "2010-01-01");
    assert_eq!(v[0]["quote"], "Life is short.");
    assert_eq!(v[0]["id"].as_str().unwrap().len(), 32);
}

#[test]
fn missing_fields_get_placeholders_on_export() {
    let page = ArchivePage::new("p", "<dl><dt>March 9</dt></dl>", ArchiveHint::new("March", "2009"));
    let results = runner::extract_pages(vec![page], &ExtractOptions::default(), None);
    let quotes = file::collect_quotes(&results);
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].quote, "(No quote text available)");
    assert_eq!(quotes[0].author, "Unknown");
}

#[test]
fn same_page_twice_is_deduplicated() {
    let html = legacy(1, "Life is short.", "Seneca");
    let hint = ArchiveHint::new("January", "2010");
    let pages = vec![
        ArchivePage::new("a", html.clone(), hint.clone()),
        ArchivePage::new("b", html, hint),
    ];
    let results = runner::extract_pages(pages, &ExtractOptions::default(), None);
    assert_eq!(file::collect_quotes(&results).len(), 1);
}
