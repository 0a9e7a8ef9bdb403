// src/error.rs
//
// Errors of the layers around the engine (files, hints, export). The extractors
// themselves never return these; they signal failure with `None`.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot derive month and year from page name: {0}")]
    PageName(String),

    #[error("unknown markup era: {0} (expected legacy, transitional or modern)")]
    UnknownEra(String),

    #[error("unknown export format: {0} (expected csv, tsv or json)")]
    UnknownFormat(String),

    #[error("failed to serialize quotes: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
