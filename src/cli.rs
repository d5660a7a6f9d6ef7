// src/cli.rs
use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::Result;

use crate::config::consts::{BASE_URL, JITTER_MS, REQUEST_PAUSE_MS, TIMEOUT_SECS, WORKERS};
use crate::config::options::{ExportFormat, ExportOptions, ScrapeOptions};
use crate::data::Collection;
use crate::progress::Progress;

/// Collect a player's mods, score every secondary stat against the rest of
/// the collection, and print them best-first.
#[derive(Parser, Debug)]
#[command(name = "mod_scrape", version, about)]
pub struct Cli {
    /// Profile id, as in /u/<USER>/mods/
    pub user: String,

    /// Pages fetched in parallel
    #[arg(short, long, default_value_t = WORKERS)]
    pub workers: usize,

    /// Site root
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Pause after each page request, per worker
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Write to a file (or into a directory with a trailing '/') instead of stdout
    #[arg(short, long)]
    pub out: Option<String>,

    /// Include a header row in CSV/TSV output
    #[arg(long)]
    pub headers: bool,

    /// Only output the N best mods
    #[arg(long)]
    pub top: Option<usize>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Errors only; no progress lines
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Csv,
    Tsv,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Table => ExportFormat::Table,
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
            Format::Json => ExportFormat::Json,
        }
    }
}

impl Cli {
    pub fn scrape_options(&self) -> ScrapeOptions {
        ScrapeOptions {
            user: self.user.trim().to_string(),
            base_url: self.base_url.clone(),
            workers: self.workers,
            request_pause_ms: self.pause_ms,
            jitter_ms: JITTER_MS,
            timeout_secs: self.timeout,
        }
    }

    pub fn export_options(&self) -> ExportOptions {
        let mut opts = ExportOptions {
            format: self.format.into(),
            include_headers: self.headers,
            top: self.top,
            ..Default::default()
        };
        if let Some(out) = &self.out {
            opts.set_path(out);
        }
        opts
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Progress lines on stderr so stdout stays clean for the export.
pub struct StderrProgress {
    total: u32,
    settled: u32,
    quiet: bool,
}

impl StderrProgress {
    pub fn new(quiet: bool) -> Self {
        Self { total: 0, settled: 0, quiet }
    }
}

impl Progress for StderrProgress {
    fn begin(&mut self, total_pages: u32) {
        self.total = total_pages;
    }

    fn log(&mut self, msg: &str) {
        if !self.quiet { eprintln!("{msg}"); }
    }

    fn page_done(&mut self, page: u32, mods: usize) {
        self.settled += 1;
        if !self.quiet {
            eprintln!("[{}/{}] page {page}: {mods} mods", self.settled, self.total);
        }
    }

    fn page_failed(&mut self, page: u32, reason: &str) {
        self.settled += 1;
        eprintln!("[{}/{}] page {page} FAILED: {reason}", self.settled, self.total);
    }

    fn scoring(&mut self, mods: usize) {
        if !self.quiet { eprintln!("Scoring {mods} mods…"); }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let scrape = cli.scrape_options();
    let export = cli.export_options();
    let mut progress = StderrProgress::new(cli.quiet);

    let collection = crate::scrape::collect_mods(&scrape, Some(&mut progress))?;

    // Error level so `-q` still says the result is incomplete.
    if let Some(notice) = partial_notice(&collection) {
        loge!("{notice}");
    }
    if collection.is_empty() && !collection.is_partial() {
        progress.log("No mods found.");
    }

    crate::file::write_export(&export, &collection)?;
    Ok(())
}

/// One-line summary of the pages missing from a partial result.
fn partial_notice(collection: &Collection) -> Option<String> {
    if !collection.is_partial() {
        return None;
    }
    let pages: Vec<String> = collection.failed_pages.iter().map(|f| f.page.to_string()).collect();
    Some(format!(
        "partial result: {} of {} page(s) failed ({})",
        collection.failed_pages.len(),
        collection.page_count,
        pages.join(", ")
    ))
}

/// Parse args, install logging, run. For `src/bin/cli.rs`.
pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.log_level());
    run(cli)
}
