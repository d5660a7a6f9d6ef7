// src/scrape/mod.rs
mod scrape;

pub use scrape::collect_mods;
pub use scrape::collect_mods_with;
pub use scrape::resolve_page_count;
