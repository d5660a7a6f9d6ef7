// src/specs/stat.rs
//! Stat label/value parsing.
//!
//! `"+15"` → 15, `"8.5%"` → 8.5 with the label suffixed `" %"`, so flat and
//! percentage versions of the same stat are separate populations.

use crate::data::Stat;
use crate::error::ParseError;

pub const PERCENT_SUFFIX: &str = " %";

pub fn parse_stat(label: &str, raw_value: &str) -> Result<Stat, ParseError> {
    let label = label.trim();
    let mut value = raw_value.trim();
    value = value.strip_prefix('+').unwrap_or(value);

    let kind = match value.strip_suffix('%') {
        Some(rest) => {
            value = rest.trim_end();
            join!(label, PERCENT_SUFFIX)
        }
        None => s!(label),
    };

    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Stat { kind, value: v }),
        _ => Err(ParseError { label: s!(label), value: s!(raw_value) }),
    }
}

/// Parse, or fall back to the zero stat (empty type, 0.0) with a warning.
/// Garbled markup never costs us the whole mod.
pub fn parse_stat_or_zero(label: &str, raw_value: &str) -> Stat {
    parse_stat(label, raw_value).unwrap_or_else(|e| {
        logw!("{e}; using zero value");
        Stat::default()
    })
}
