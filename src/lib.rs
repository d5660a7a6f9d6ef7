// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod export;
pub mod file;
pub mod progress;
pub mod score;
pub mod scrape;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use data::{Collection, Mod, ModSet, PageFailure, PrimaryStat, SecondaryStat, Slot, Stat};
pub use error::{ExportError, FetchError, FormatError, ParseError, ScrapeError};
pub use scrape::{collect_mods, collect_mods_with, resolve_page_count};
