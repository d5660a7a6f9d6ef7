// src/specs/pagination.rs
//! Page count from the listing's pagination widget ("Page 1 of 12").

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::config::consts::MAX_PAGES;
use crate::core::html::{sel, FieldExtractor};
use crate::error::FormatError;

static PAGINATION: Lazy<Selector> = Lazy::new(|| sel(".pull-right .pagination li a"));
static PAGE_OF: Lazy<Regex> = Lazy::new(|| Regex::new(r"Page\s+[0-9]+\s+of\s+([0-9]+)").unwrap());

/// N from "Page X of N". N must lie in `1..=MAX_PAGES`.
pub fn parse_page_text(text: &str) -> Result<u32, FormatError> {
    PAGE_OF
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|n| (1..=MAX_PAGES).contains(n))
        .ok_or_else(|| FormatError::Pagination(s!(text)))
}

pub fn page_count(doc: &Html) -> Result<u32, FormatError> {
    let text = doc.text_of(&PAGINATION).ok_or(FormatError::MissingPagination)?;
    logd!("Found page text {text:?}");
    parse_page_text(&text)
}

pub fn page_count_from_str(html: &str) -> Result<u32, FormatError> {
    page_count(&Html::parse_document(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_text_variants() {
        assert_eq!(parse_page_text("Page 1 of 12"), Ok(12));
        assert_eq!(parse_page_text("  Page 3 of 3 "), Ok(3));
        assert_eq!(parse_page_text("Page 1\n  of 2"), Ok(2));
        assert!(matches!(parse_page_text("Next"), Err(FormatError::Pagination(_))));
        assert!(parse_page_text("Page 1 of 0").is_err());
    }

    #[test]
    fn page_count_is_capped() {
        assert_eq!(parse_page_text(&format!("Page 1 of {MAX_PAGES}")), Ok(MAX_PAGES));
        let over = format!("Page 1 of {}", MAX_PAGES + 1);
        assert_eq!(parse_page_text(&over), Err(FormatError::Pagination(over.clone())));
        assert!(parse_page_text("Page 1 of 4294967295").is_err());
        assert!(parse_page_text("Page 1 of 99999999999").is_err());
    }

    #[test]
    fn reads_first_pagination_link() {
        let html = r#"
            <div class="pull-right">
              <ul class="pagination">
                <li><a href="?page=1">Page 1 of 7</a></li>
                <li><a href="?page=2">Next</a></li>
              </ul>
            </div>
        "#;
        assert_eq!(page_count_from_str(html), Ok(7));
    }

    #[test]
    fn missing_widget_is_format_error() {
        let html = r#"<ul class="pagination"><li><a>Page 1 of 7</a></li></ul>"#;
        assert_eq!(page_count_from_str(html), Err(FormatError::MissingPagination));
    }
}
