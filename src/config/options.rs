// src/config/options.rs
use std::path::{ Path, PathBuf };

use super::consts::*;
use crate::error::ScrapeError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub user: String,
    pub base_url: String,
    pub workers: usize,
    pub request_pause_ms: u64,
    pub jitter_ms: u64,
    pub timeout_secs: u64,
}

impl ScrapeOptions {
    pub fn for_user(user: impl Into<String>) -> Self {
        Self { user: user.into(), ..Self::default() }
    }

    /// Reject user ids that would escape the `/u/<user>/mods/` path segment.
    pub fn validate(&self) -> Result<(), ScrapeError> {
        let user = self.user.trim();
        if user.is_empty() {
            return Err(ScrapeError::Config(s!("user id is empty")));
        }
        if user.chars().any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#')) {
            return Err(ScrapeError::Config(format!("user id {user:?} contains reserved characters")));
        }
        if self.workers == 0 {
            return Err(ScrapeError::Config(s!("workers must be at least 1")));
        }
        Ok(())
    }
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            user: s!(),
            base_url: s!(BASE_URL),
            workers: WORKERS,
            request_pause_ms: REQUEST_PAUSE_MS,
            jitter_ms: JITTER_MS,
            timeout_secs: TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Table,
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Table => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Table | ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// None → stdout
    pub out: Option<PathBuf>,
    pub include_headers: bool,
    /// Only the N best mods; None keeps everything.
    pub top: Option<usize>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Table,
            out: None,
            include_headers: false,
            top: None,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> Option<&Path> {
        self.out.as_deref()
    }

    /// A trailing separator or an existing directory means "write `mods.<ext>` in here".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out = None;
            return;
        }
        let p = PathBuf::from(s);
        let is_dir_hint = s.ends_with('/') || s.ends_with('\\') || p.is_dir();
        self.out = Some(if is_dir_hint {
            p.join(join!(DEFAULT_FILE, ".", self.format.ext()))
        } else {
            p
        });
    }
}
