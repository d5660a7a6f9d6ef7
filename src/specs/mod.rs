// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge about the mod listing: *where the ground truth
//! lives in the HTML* and *how to turn it into typed values*.
//!
//! ## What lives here
//! - **Selector tables** for the listing page (pagination, mod cards, stats).
//! - **Pure extraction**: document text in, `Mod`s / page count out. No I/O.
//! - **Value parsing** for stat label/value pairs (`stat`).
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`), **fan-out/aggregation** (`scrape`),
//!   **scoring/ranking** (`score`), **export** (`export`).
//!
//! ## Conventions
//! - Missing optional fields become zero values; a card is never dropped
//!   because one field is absent or garbled. Anything substituted is logged.
//! - Structural markers the run depends on (pagination) fail loudly with
//!   `FormatError`.
//!
//! ## Testing notes
//! Everything here is testable offline against inline HTML fixtures.
pub mod mods;
pub mod pagination;
pub mod stat;
