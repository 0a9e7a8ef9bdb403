// src/file.rs

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions, ExportType};
use crate::core::sanitize::sanitize_stem;
use crate::csv::to_export_string;
use crate::error::{Error, Result};
use crate::runner::PageResult;
use crate::store::{self, DataSet, StoredQuote};

/// Text of one export in the chosen format. JSON ignores `include_headers`.
pub fn render(format: ExportFormat, quotes: &[StoredQuote], include_headers: bool) -> Result<String> {
    match format.delimiter() {
        Some(sep) => {
            let data = DataSet::from_quotes(quotes);
            Ok(to_export_string(&data.headers, &data.rows, include_headers, sep))
        }
        None => {
            let mut text = serde_json::to_string_pretty(quotes)?;
            text.push('\n');
            Ok(text)
        }
    }
}

/// Assembled and de-duplicated quotes of every page that produced records.
pub fn collect_quotes(results: &[PageResult]) -> Vec<StoredQuote> {
    let all = results
        .iter()
        .filter_map(|r| r.records.as_deref())
        .flat_map(store::assemble)
        .collect();
    store::dedup(all)
}

/// Write the results according to `export`. Returns the paths written.
/// Pages without records get no file of their own.
pub fn export_pages(export: &ExportOptions, results: &[PageResult]) -> Result<Vec<PathBuf>> {
    match export.export_type {
        ExportType::SingleFile => {
            let path = export.out_path();
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            let contents = render(export.format, &collect_quotes(results), export.include_headers)?;
            write_text(&path, &contents)?;
            logf!("Wrote {}", path.display());
            Ok(vec![path])
        }
        ExportType::PerPage => {
            let outdir = export.out_path();
            ensure_directory(&outdir)?;

            let mut seen: HashMap<String, usize> = HashMap::new();
            let mut written = Vec::with_capacity(results.len());
            let ext = export.format.ext();

            for result in results {
                let Some(records) = result.records.as_deref() else {
                    logd!("No records for {}; no file written", result.name);
                    continue;
                };
                let stem = sanitize_stem(page_stem(&result.name), "page");
                let path = resolve_page_filename(&outdir, &stem, &mut seen, ext);

                let quotes = store::dedup(store::assemble(records));
                let contents = render(export.format, &quotes, export.include_headers)?;
                write_text(&path, &contents)?;
                logd!("Wrote {} quotes to {}", quotes.len(), path.display());
                written.push(path);
            }
            logf!("Wrote {} files to {}", written.len(), outdir.display());
            Ok(written)
        }
    }
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write { path: path.to_path_buf(), source })
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let source = io::Error::other("path exists but is not a directory");
        return Err(Error::Write { path: dir.to_path_buf(), source });
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| Error::Write { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

/// Last segment of a page name or path, without an html extension.
fn page_stem(name: &str) -> &str {
    let last = name.trim_end_matches(['/', '\\']).rsplit(['/', '\\']).next().unwrap_or(name);
    Path::new(last).file_stem().and_then(|s| s.to_str()).unwrap_or(last)
}

/// Duplicate handling **only within this run**
pub fn resolve_page_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "tsv" | "json"
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
