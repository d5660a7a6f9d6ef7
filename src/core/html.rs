// src/core/html.rs
//
// Field lookup over a parsed page. Specs describe *where* fields live with
// CSS selectors; this layer only answers "first text", "first attribute",
// "how many" for a document or any element inside it.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// Compile a selector that is known at build time.
/// Only used for the fixed selector tables in `specs`.
pub fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e:?}"))
}

pub trait FieldExtractor {
    /// Whitespace-normalized text of the first match (descendant text concatenated).
    fn text_of(&self, sel: &Selector) -> Option<String>;
    /// Attribute of the first match.
    fn attr_of(&self, sel: &Selector, name: &str) -> Option<String>;
    /// Number of matching elements.
    fn count_of(&self, sel: &Selector) -> usize;
}

impl FieldExtractor for ElementRef<'_> {
    fn text_of(&self, sel: &Selector) -> Option<String> {
        self.select(sel)
            .next()
            .map(|el| normalize_ws(&el.text().collect::<String>()))
    }

    fn attr_of(&self, sel: &Selector, name: &str) -> Option<String> {
        self.select(sel)
            .next()
            .and_then(|el| el.value().attr(name))
            .map(str::to_string)
    }

    fn count_of(&self, sel: &Selector) -> usize {
        self.select(sel).count()
    }
}

impl FieldExtractor for Html {
    fn text_of(&self, sel: &Selector) -> Option<String> {
        self.root_element().text_of(sel)
    }

    fn attr_of(&self, sel: &Selector, name: &str) -> Option<String> {
        self.root_element().attr_of(sel, name)
    }

    fn count_of(&self, sel: &Selector) -> usize {
        self.root_element().count_of(sel)
    }
}

/// Attribute on the element itself (not a descendant).
pub fn own_attr(el: &ElementRef<'_>, name: &str) -> Option<String> {
    el.value().attr(name).map(str::to_string)
}
