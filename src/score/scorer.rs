// src/score/scorer.rs
use crate::config::consts::MAX_SCORE;
use crate::data::Mod;
use super::ranges::{FrozenRanges, StatRange};

/// Round half away from zero: 2.5 → 3, -2.5 → -3, 2.4 → 2.
#[inline]
pub fn round_half_away(x: f64) -> i64 {
    // f64::round already rounds halves away from zero.
    x.round() as i64
}

/// Min-max normalize `value` into 0..=100.
///
/// A zero-width range (every qualified sample equal) scores 100 for values at
/// or above it and 0 below. Values outside the range clamp to the ends; that
/// only happens for non-qualified mods, which never widened the range.
pub fn score_value(value: f64, range: &StatRange) -> u8 {
    let span = range.span();
    if span <= 0.0 {
        return if value >= range.min { MAX_SCORE as u8 } else { 0 };
    }
    let pct = ((value - range.min) / span * MAX_SCORE).clamp(0.0, MAX_SCORE);
    round_half_away(pct) as u8
}

/// Fill in every secondary score and the total.
/// Stat types without a range stay unscored and add nothing to the total.
pub fn score_mod(m: &mut Mod, ranges: &FrozenRanges) {
    let mut total = 0u32;
    for s in m.secondary_stats.iter_mut() {
        s.score = ranges.get(&s.stat.kind).map(|r| score_value(s.stat.value, r));
        match s.score {
            Some(score) => total += u32::from(score),
            None => logd!("mod {}: no range for {:?}, left unscored", m.uid, s.stat.kind),
        }
    }
    m.total_score = total;
}

pub fn score_all(mods: &mut [Mod], ranges: &FrozenRanges) {
    for m in mods.iter_mut() {
        score_mod(m, ranges);
    }
}
