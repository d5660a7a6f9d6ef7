// src/score/mod.rs
//! Cross-collection scoring.
//!
//! `ranges` builds per-stat min/max over qualified mods while pages stream in,
//! `scorer` turns those ranges into 0..=100 scores once every page is done,
//! `rank` orders the result.
//!
//! The split between `StatRanges` (being built, write-only) and
//! `FrozenRanges` (read-only) is what keeps a half-built table away from
//! the scorer: the only way to get lookups is `StatRanges::freeze`, which
//! `scrape::collect_mods` calls after joining every worker.
pub mod rank;
pub mod ranges;
pub mod scorer;

pub use rank::rank;
pub use ranges::{FrozenRanges, StatRange, StatRanges};
pub use scorer::{round_half_away, score_all, score_value};
