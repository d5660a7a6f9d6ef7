// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://swgoh.gg";
pub const USER_AGENT: &str = concat!("mod_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
pub const MAX_PAGES: u32 = 1000; // larger "of N" is rejected as malformed

// Scoring: only mods at or above both thresholds feed the stat ranges
pub const QUALIFY_MIN_LEVEL: u8 = 12;
pub const QUALIFY_MIN_PIPS: u8 = 4;
pub const MAX_SCORE: f64 = 100.0;

// Export
pub const DEFAULT_FILE: &str = "mods";
