// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use std::str::FromStr;

use super::consts::*;
use crate::era::{ ArchiveHint, Era };
use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Force one markup era instead of dispatching on the page's month/year.
    pub era: Option<Era>,
    /// Month/year applied to every page instead of the one in its name.
    pub hint: Option<ArchiveHint>,
    pub workers: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { era: None, hint: None, workers: WORKERS }
    }
}

impl ExtractOptions {
    pub fn era_for(&self, hint: &ArchiveHint) -> Era {
        self.era.unwrap_or_else(|| hint.era())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    PerPage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv", ExportFormat::Json => "json" }
    }

    /// Field separator for the delimited formats.
    pub fn delimiter(&self) -> Option<char> {
        match self { ExportFormat::Csv => Some(','), ExportFormat::Tsv => Some('\t'), ExportFormat::Json => None }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(Error::UnknownFormat(s!(other))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            out_path: OutputPath::default(),
            include_headers: false,
        }
    }
}

impl ExportOptions {
    /// Single file: `<dir>/<stem>.<ext>`. Per page: the directory.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();

        match self.export_type {
            ExportType::SingleFile => {
                let stem = self.out_path.file_stem.to_string_lossy();
                path.push(format!("{}.{}", stem, self.format.ext()));
            }
            ExportType::PerPage => { /* directory only */ }
        }
        path
    }

    /// Parse user text into dir + stem. A typed extension is ignored; the format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();

        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
            }
            ExportType::PerPage => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
