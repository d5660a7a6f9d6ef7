// src/specs/mods.rs
//! Page knowledge for the mod listing page.
//!
//! One `.collection-mod` card per mod:
//! - id: card attribute `data-id`
//! - set/slot: `.statmod-img[src]`, `statmodmystery_<set>_<slot>.png`
//! - pips: number of `.statmod-pip`
//! - level: `.statmod-level` text
//! - character: `.char-portrait[title]`
//! - primary: `.statmod-stats-1` label/value
//! - secondaries: every `.statmod-stats-2 .statmod-stat` label/value
//!
//! Absent fields become zero values; the card is always kept.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::core::html::{own_attr, sel, FieldExtractor};
use crate::core::sanitize::leading_digits;
use crate::data::{ModSet, Mod, PrimaryStat, SecondaryStat, Slot};
use crate::error::FormatError;
use super::stat::parse_stat_or_zero;

struct Selectors {
    card: Selector,
    image: Selector,
    pip: Selector,
    level: Selector,
    portrait: Selector,
    primary_label: Selector,
    primary_value: Selector,
    secondary: Selector,
    stat_label: Selector,
    stat_value: Selector,
}

static SEL: Lazy<Selectors> = Lazy::new(|| Selectors {
    card: sel(".collection-mod"),
    image: sel(".statmod-img"),
    pip: sel(".statmod-pip"),
    level: sel(".statmod-level"),
    portrait: sel(".char-portrait"),
    primary_label: sel(".statmod-stats-1 .statmod-stat-label"),
    primary_value: sel(".statmod-stats-1 .statmod-stat-value"),
    secondary: sel(".statmod-stats-2 .statmod-stat"),
    stat_label: sel(".statmod-stat-label"),
    stat_value: sel(".statmod-stat-value"),
});

static IMAGE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"statmodmystery_([0-9])_([0-9])\.png").unwrap());

/// Image reference → (set, slot). Unknown codes map to None;
/// a reference without the code pattern is a `FormatError`.
pub fn decode_image(src: &str) -> Result<(Option<ModSet>, Option<Slot>), FormatError> {
    let caps = IMAGE_CODE
        .captures(src)
        .ok_or_else(|| FormatError::ImageCode(s!(src)))?;
    let code = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u8>().ok());
    let set = code(1).and_then(ModSet::from_code);
    let slot = code(2).and_then(Slot::from_code);
    Ok((set, slot))
}

/// Call `emit` for every mod card on the page, in document order.
/// Returns how many cards were seen.
pub fn for_each_mod(doc: &Html, page: u32, mut emit: impl FnMut(Mod)) -> usize {
    let mut n = 0usize;
    for card in doc.select(&SEL.card) {
        emit(extract_card(&card, page));
        n += 1;
    }
    n
}

pub fn extract_mods(doc: &Html, page: u32) -> Vec<Mod> {
    let mut out = Vec::new();
    for_each_mod(doc, page, |m| out.push(m));
    out
}

pub fn extract_mods_from_str(html: &str, page: u32) -> Vec<Mod> {
    extract_mods(&Html::parse_document(html), page)
}

fn extract_card(card: &ElementRef<'_>, page: u32) -> Mod {
    let uid = own_attr(card, "data-id").unwrap_or_default();

    let (set, slot) = match card.attr_of(&SEL.image, "src") {
        Some(src) => decode_image(&src).unwrap_or_else(|e| {
            logw!("page {page}, mod {uid:?}: {e}");
            (None, None)
        }),
        None => (None, None),
    };

    let pips = u8::try_from(card.count_of(&SEL.pip)).unwrap_or(u8::MAX);

    let level = card
        .text_of(&SEL.level)
        .as_deref()
        .and_then(leading_digits)
        .and_then(|d| d.parse::<u8>().ok())
        .unwrap_or(0);

    let character_name = card.attr_of(&SEL.portrait, "title").unwrap_or_default();

    let primary = parse_stat_or_zero(
        &card.text_of(&SEL.primary_label).unwrap_or_default(),
        &card.text_of(&SEL.primary_value).unwrap_or_default(),
    );

    let secondary_stats = card
        .select(&SEL.secondary)
        .map(|node| {
            let stat = parse_stat_or_zero(
                &node.text_of(&SEL.stat_label).unwrap_or_default(),
                &node.text_of(&SEL.stat_value).unwrap_or_default(),
            );
            SecondaryStat::unscored(stat)
        })
        .collect();

    Mod {
        uid,
        slot,
        set,
        level,
        pips,
        total_score: 0,
        character_name,
        primary_stat: PrimaryStat(primary),
        secondary_stats,
    }
}
