// src/score/ranges.rs
use std::collections::HashMap;

use serde::Serialize;

use crate::data::Mod;

/// Observed bounds for one stat type. Only exists once it has a sample,
/// so `min <= max` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StatRange {
    pub min: f64,
    pub max: f64,
    pub samples: u32,
}

impl StatRange {
    fn seed(value: f64) -> Self {
        Self { min: value, max: value, samples: 1 }
    }

    fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.samples += 1;
    }

    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }

    #[inline]
    pub fn contains(&self, value: f64) -> bool { self.min <= value && value <= self.max }
}

/// Stat ranges under construction. Write-only: owned by the aggregator.
#[derive(Debug, Default)]
pub struct StatRanges {
    map: HashMap<String, StatRange>,
}

impl StatRanges {
    pub fn new() -> Self { Self::default() }

    /// Fold a mod's secondaries in if the mod is qualified.
    /// Zero-value fallbacks (empty type) are not a population and are skipped.
    /// Returns whether the mod contributed.
    pub fn observe(&mut self, m: &Mod) -> bool {
        if !m.is_qualified() {
            return false;
        }
        for s in &m.secondary_stats {
            if s.stat.kind.is_empty() {
                continue;
            }
            match self.map.get_mut(&s.stat.kind) {
                Some(r) => r.include(s.stat.value),
                None => {
                    self.map.insert(s.stat.kind.clone(), StatRange::seed(s.stat.value));
                }
            }
        }
        true
    }

    /// End of aggregation. After this the table can only be read.
    pub fn freeze(self) -> FrozenRanges {
        FrozenRanges { map: self.map }
    }
}

/// Final, read-only stat ranges for one run.
#[derive(Debug, Default, Clone)]
pub struct FrozenRanges {
    map: HashMap<String, StatRange>,
}

impl FrozenRanges {
    pub fn get(&self, kind: &str) -> Option<&StatRange> { self.map.get(kind) }
    pub fn len(&self) -> usize { self.map.len() }
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Sorted by stat type, for stable logs/output.
    pub fn sorted(&self) -> Vec<(&str, &StatRange)> {
        let mut v: Vec<_> = self.map.iter().map(|(k, r)| (k.as_str(), r)).collect();
        v.sort_by(|a, b| a.0.cmp(b.0));
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SecondaryStat, Stat};

    fn mk(level: u8, pips: u8, stats: &[(&str, f64)]) -> Mod {
        Mod {
            level,
            pips,
            secondary_stats: stats
                .iter()
                .map(|(k, v)| SecondaryStat::unscored(Stat::new(*k, *v)))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn only_qualified_mods_contribute() {
        let mut r = StatRanges::new();
        assert!(r.observe(&mk(15, 5, &[("Speed", 10.0)])));
        assert!(!r.observe(&mk(11, 6, &[("Speed", 1.0)])));
        assert!(!r.observe(&mk(15, 3, &[("Speed", 99.0), ("Potency %", 2.0)])));
        assert!(r.observe(&mk(12, 4, &[("Speed", 4.0)])));

        let f = r.freeze();
        assert_eq!(f.get("Speed"), Some(&StatRange { min: 4.0, max: 10.0, samples: 2 }));
        assert_eq!(f.get("Potency %"), None);
    }

    #[test]
    fn every_contributed_value_is_inside_its_range() {
        let mods = vec![
            mk(15, 5, &[("Speed", 5.0), ("Offense %", 1.2)]),
            mk(15, 6, &[("Speed", 20.0), ("Offense %", 0.4)]),
            mk(12, 4, &[("Speed", 11.0), ("Health", 400.0)]),
            mk(13, 5, &[("Offense %", 2.9)]),
        ];
        let mut r = StatRanges::new();
        for m in &mods { r.observe(m); }
        let f = r.freeze();

        for m in mods.iter().filter(|m| m.is_qualified()) {
            for s in &m.secondary_stats {
                let range = f.get(&s.stat.kind).unwrap();
                assert!(range.min <= range.max);
                assert!(range.contains(s.stat.value), "{} {}", s.stat.kind, s.stat.value);
            }
        }
        assert_eq!(f.len(), 3);
    }

    #[test]
    fn zero_value_fallbacks_are_ignored() {
        let mut r = StatRanges::new();
        r.observe(&mk(15, 5, &[("", 0.0), ("Speed", 3.0)]));
        let f = r.freeze();
        assert_eq!(f.get(""), None);
        assert_eq!(f.sorted().iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec!["Speed"]);
    }

    #[test]
    fn percent_and_flat_are_separate_ranges() {
        let mut r = StatRanges::new();
        r.observe(&mk(15, 5, &[("Offense", 40.0), ("Offense %", 1.0)]));
        r.observe(&mk(15, 5, &[("Offense", 80.0), ("Offense %", 2.0)]));
        let f = r.freeze();
        assert_eq!(f.get("Offense").map(|r| (r.min, r.max)), Some((40.0, 80.0)));
        assert_eq!(f.get("Offense %").map(|r| (r.min, r.max)), Some((1.0, 2.0)));
    }
}
