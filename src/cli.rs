// src/cli.rs
use std::path::PathBuf;

use clap::{ ArgAction, Args, Parser, Subcommand };
use color_eyre::eyre::{ bail, WrapErr };

use crate::{
    config::{ consts::{ DEFAULT_OUT_DIR, WORKERS }, AppOptions, ExportFormat, ExportType, ExtractOptions },
    era::{ ArchiveHint, Era },
    file,
    progress::Progress,
    runner::{ self, PageResult },
    store::StoredQuote,
};

/// Quote-of-the-day extraction from saved Wikiquote pages
#[derive(Parser, Debug)]
#[command(name = "qotd", version)]
pub struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract every dated quote from month-archive pages
    Archive(ArchiveArgs),
    /// Extract the featured quote from a "Quote of the day" page
    Today(TodayArgs),
}

#[derive(Args, Debug)]
pub struct ArchiveArgs {
    /// Saved archive pages; month and year are read from the file names
    #[arg(required = true)]
    pub pages: Vec<PathBuf>,

    /// Month for every page, instead of the file names
    #[arg(long, requires = "year")]
    pub month: Option<String>,

    /// Year for every page, instead of the file names
    #[arg(long, requires = "month")]
    pub year: Option<String>,

    /// Force a markup era: legacy, transitional or modern
    #[arg(long)]
    pub era: Option<Era>,

    /// csv, tsv or json
    #[arg(long, default_value = "csv")]
    pub format: ExportFormat,

    /// One output file per page (into the -o directory)
    #[arg(long)]
    pub per_page: bool,

    #[arg(long)]
    pub include_headers: bool,

    /// Output file, or directory with --per-page. Without it quotes go to stdout.
    #[arg(short, long)]
    pub out: Option<String>,

    #[arg(long, default_value_t = WORKERS)]
    pub workers: usize,
}

#[derive(Args, Debug)]
pub struct TodayArgs {
    /// Saved "Wikiquote:Quote of the day" page
    pub page: PathBuf,

    #[arg(long, default_value = "json")]
    pub format: ExportFormat,
}

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    match cli.command {
        Command::Archive(args) => run_archive(args),
        Command::Today(args) => run_today(args),
    }
}

fn run_archive(args: ArchiveArgs) -> color_eyre::Result<()> {
    let hint = match (args.month, args.year) {
        (Some(month), Some(year)) => Some(ArchiveHint::new(month, year)),
        _ => None,
    };

    let mut opts = AppOptions {
        extract: ExtractOptions { era: args.era, hint: None, workers: args.workers.max(1) },
        ..AppOptions::default()
    };
    opts.export.format = args.format;
    opts.export.include_headers = args.include_headers;
    if args.per_page {
        opts.export.export_type = ExportType::PerPage;
    }

    let mut pages = Vec::with_capacity(args.pages.len());
    for path in &args.pages {
        let page = runner::load_page(path, hint.as_ref())
            .wrap_err_with(|| format!("cannot load {}", path.display()))?;
        pages.push(page);
    }

    let mut progress = CliProgress::default();
    let results = runner::extract_pages(pages, &opts.extract, Some(&mut progress));

    if results.iter().all(|r| r.records.is_none()) {
        bail!("no page produced any quotes");
    }

    match (args.out, opts.export.export_type) {
        (None, ExportType::SingleFile) => print_results(&results, opts.export.format, opts.export.include_headers)?,
        (out, _) => {
            opts.export.set_path(out.as_deref().unwrap_or(DEFAULT_OUT_DIR));
            for path in file::export_pages(&opts.export, &results)? {
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}

fn print_results(results: &[PageResult], format: ExportFormat, include_headers: bool) -> color_eyre::Result<()> {
    let quotes = file::collect_quotes(results);
    print!("{}", file::render(format, &quotes, include_headers)?);
    Ok(())
}

fn run_today(args: TodayArgs) -> color_eyre::Result<()> {
    let today = runner::extract_today_file(&args.page)?;
    if !today.has_quote() {
        logw!("No featured quote found in {}", args.page.display());
    }
    let stored = StoredQuote::from_today(&today);
    print!("{}", file::render(args.format, &[stored], true)?);
    Ok(())
}

/// Per-page status lines on the log.
#[derive(Default)]
struct CliProgress {
    total: usize,
    seen: usize,
    failed: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        logd!("{msg}");
    }

    fn item_done(&mut self, page: &str, records: usize) {
        self.seen += 1;
        logf!("[{}/{}] {page}: {records} quotes", self.seen, self.total);
    }

    fn item_failed(&mut self, page: &str) {
        self.seen += 1;
        self.failed += 1;
        logw!("[{}/{}] {page}: no quotes", self.seen, self.total);
    }

    fn finish(&mut self) {
        if self.failed > 0 {
            logw!("{} of {} pages produced no quotes", self.failed, self.total);
        }
    }
}
