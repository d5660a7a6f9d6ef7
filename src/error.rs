// src/error.rs
//
// Error taxonomy for a collection run.
// Fetch/Format on the first page abort the run; per-page fetch failures are
// collected into `Collection::failed_pages` instead (see scrape::collect_mods).

use thiserror::Error;

/// Transport-level failure retrieving one listing page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("page {page}: request failed: {source}")]
    Http {
        page: u32,
        #[source]
        source: reqwest::Error,
    },
    #[error("page {page}: unexpected HTTP status {status}")]
    Status { page: u32, status: u16 },
}

impl FetchError {
    pub fn page(&self) -> u32 {
        match self {
            FetchError::Http { page, .. }
            | FetchError::Status { page, .. } => *page,
        }
    }
}

/// An expected structural marker was missing or did not match.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("pagination indicator not found")]
    MissingPagination,
    #[error("pagination text {0:?} is not a usable \"Page X of N\"")]
    Pagination(String),
    #[error("image reference {0:?} does not carry set/slot codes")]
    ImageCode(String),
}

/// A numeric field could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot parse {value:?} for stat {label:?}")]
pub struct ParseError {
    pub label: String,
    pub value: String,
}

/// Run-level failure.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("all {0} pages failed to load")]
    NoPagesSucceeded(u32),
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

/// Writing ranked output failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(std::path::PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
