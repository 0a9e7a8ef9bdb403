// src/csv.rs
use std::io::{self, Write};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Create a full export string from a table.
/// - `headers`: header row (if any)
/// - `include_headers`: whether to emit it
/// - `sep`: field separator
pub fn to_export_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        if let Some(h) = headers {
            let _ = write_row(&mut buf, h, sep);
        }
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
