// src/log.rs
//
// Thin wrappers over the `log` facade so call sites stay short.
// The CLI installs the backend (`init`); library code only emits.

#[doc(hidden)]
pub use ::log::{debug, error, info, warn};

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::info!(target: "mod_scrape", $($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::debug!(target: "mod_scrape", $($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::warn!(target: "mod_scrape", $($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::error!(target: "mod_scrape", $($arg)*)
    };
}

/// `hh:mm:ss.mmm` since process start.
pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Install `env_logger` with the `[elapsed][LEVEL] msg` line format.
/// `RUST_LOG` wins over `default_level` when set.
#[cfg(feature = "cli")]
pub fn init(default_level: ::log::LevelFilter) {
    use std::io::Write;
    use std::time::Instant;

    let start = Instant::now();
    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level);
    builder.parse_default_env();
    builder.format(move |buf, record| {
        let elapsed = fmt_elapsed(start.elapsed().as_millis());
        writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
    });
    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}
