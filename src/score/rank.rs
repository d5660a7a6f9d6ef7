// src/score/rank.rs
use std::cmp::Ordering;

use crate::data::Mod;

/// Best total first; equal totals fall back to uid so output is reproducible.
pub fn rank(mods: &mut [Mod]) {
    mods.sort_by(compare);
}

fn compare(a: &Mod, b: &Mod) -> Ordering {
    b.total_score
        .cmp(&a.total_score)
        .then_with(|| a.uid.cmp(&b.uid))
}
