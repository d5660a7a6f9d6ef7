// src/data.rs
//
// Typed records produced by a collection run.
//
// - Mod: one inventory item. Created by a page worker; its secondary scores
//        and total are written once by the scorer after every page is in.
// - Collection: the ranked output of a run plus any pages that failed.

use std::fmt;

use serde::Serialize;

use crate::config::consts::{QUALIFY_MIN_LEVEL, QUALIFY_MIN_PIPS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Square,
    Arrow,
    Diamond,
    Triangle,
    Circle,
    Cross,
}

impl Slot {
    /// Site image code (1..=6) → slot.
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            1 => Slot::Square,
            2 => Slot::Arrow,
            3 => Slot::Diamond,
            4 => Slot::Triangle,
            5 => Slot::Circle,
            6 => Slot::Cross,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Square => "square",
            Slot::Arrow => "arrow",
            Slot::Diamond => "diamond",
            Slot::Triangle => "triangle",
            Slot::Circle => "circle",
            Slot::Cross => "cross",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModSet {
    Health,
    Offense,
    Defense,
    Speed,
    CritChance,
    CritDamage,
    Potency,
    Tenacity,
}

impl ModSet {
    /// Site image code (1..=8) → set.
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            1 => ModSet::Health,
            2 => ModSet::Offense,
            3 => ModSet::Defense,
            4 => ModSet::Speed,
            5 => ModSet::CritChance,
            6 => ModSet::CritDamage,
            7 => ModSet::Potency,
            8 => ModSet::Tenacity,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModSet::Health => "health",
            ModSet::Offense => "offense",
            ModSet::Defense => "defense",
            ModSet::Speed => "speed",
            ModSet::CritChance => "critchance",
            ModSet::CritDamage => "critdamage",
            ModSet::Potency => "potency",
            ModSet::Tenacity => "tenacity",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.as_str()) }
}

impl fmt::Display for ModSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.as_str()) }
}

/// A parsed measurement. Percent stats carry a `" %"` suffix on `kind`,
/// so "Speed" and "Speed %" never share a stat range.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Stat {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
}

impl Stat {
    pub fn new(kind: impl Into<String>, value: f64) -> Self {
        Self { kind: kind.into(), value }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PrimaryStat(pub Stat);

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SecondaryStat {
    #[serde(flatten)]
    pub stat: Stat,
    /// 0..=100 once scored; stays None when no qualified mod carried this stat type.
    pub score: Option<u8>,
}

impl SecondaryStat {
    pub fn unscored(stat: Stat) -> Self { Self { stat, score: None } }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mod {
    pub uid: String,
    pub slot: Option<Slot>,
    pub set: Option<ModSet>,
    pub level: u8,
    pub pips: u8,
    pub total_score: u32,
    pub character_name: String,
    pub primary_stat: PrimaryStat,
    pub secondary_stats: Vec<SecondaryStat>,
}

impl Mod {
    /// Qualified mods are the population the stat ranges are built from.
    #[inline]
    pub fn is_qualified(&self) -> bool {
        self.level >= QUALIFY_MIN_LEVEL && self.pips >= QUALIFY_MIN_PIPS
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageFailure {
    pub page: u32,
    pub reason: String,
}

/// Result of one run: mods ranked best-first, plus pages that could not be read.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub user: String,
    pub page_count: u32,
    pub mods: Vec<Mod>,
    pub failed_pages: Vec<PageFailure>,
}

impl Collection {
    pub fn is_partial(&self) -> bool { !self.failed_pages.is_empty() }
    pub fn len(&self) -> usize { self.mods.len() }
    pub fn is_empty(&self) -> bool { self.mods.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_enums() {
        assert_eq!(Slot::from_code(1), Some(Slot::Square));
        assert_eq!(Slot::from_code(6), Some(Slot::Cross));
        assert_eq!(Slot::from_code(7), None);
        assert_eq!(ModSet::from_code(5), Some(ModSet::CritChance));
        assert_eq!(ModSet::from_code(8), Some(ModSet::Tenacity));
        assert_eq!(ModSet::from_code(0), None);
    }

    #[test]
    fn qualification_needs_both_thresholds() {
        let m = |level, pips| Mod { level, pips, ..Default::default() };
        assert!(m(12, 4).is_qualified());
        assert!(m(15, 6).is_qualified());
        assert!(!m(11, 6).is_qualified());
        assert!(!m(15, 3).is_qualified());
    }

    #[test]
    fn json_shape_uses_site_names() {
        let m = Mod {
            uid: s!("abc"),
            slot: Some(Slot::Arrow),
            set: Some(ModSet::CritDamage),
            level: 15,
            pips: 5,
            total_score: 42,
            character_name: s!("Someone"),
            primary_stat: PrimaryStat(Stat::new("Speed", 30.0)),
            secondary_stats: vec![SecondaryStat { stat: Stat::new("Offense %", 1.5), score: Some(42) }],
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["slot"], "arrow");
        assert_eq!(v["set"], "critdamage");
        assert_eq!(v["totalScore"], 42);
        assert_eq!(v["primaryStat"]["type"], "Speed");
        assert_eq!(v["secondaryStats"][0]["type"], "Offense %");
        assert_eq!(v["secondaryStats"][0]["score"], 42);
    }
}
