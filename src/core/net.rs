// src/core/net.rs
//
// Listing page transport. The pipeline only sees `PageSource`; tests swap in
// canned documents, production uses the blocking HTTPS client below.

use std::time::Duration;

use crate::config::consts::USER_AGENT;
use crate::config::options::ScrapeOptions;
use crate::error::{FetchError, ScrapeError};

/// Anything that can hand back the raw HTML of one listing page.
/// Shared by every worker thread, hence `Send + Sync`.
pub trait PageSource: Send + Sync {
    /// `page` is 1-based.
    fn fetch_page(&self, user: &str, page: u32) -> Result<String, FetchError>;
}

pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(opts: &ScrapeOptions) -> Result<Self, ScrapeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(opts.timeout_secs))
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self {
            client,
            base_url: opts.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn page_url(&self, user: &str, page: u32) -> String {
        listing_url(&self.base_url, user, page)
    }
}

pub fn listing_url(base_url: &str, user: &str, page: u32) -> String {
    let page = page.to_string();
    join!(base_url, "/u/", user, "/mods/?page=", &page)
}

impl PageSource for HttpSource {
    fn fetch_page(&self, user: &str, page: u32) -> Result<String, FetchError> {
        let url = self.page_url(user, page);
        logd!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Http { page, source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { page, status: status.as_u16() });
        }
        resp.text().map_err(|source| FetchError::Http { page, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_has_user_and_page() {
        assert_eq!(
            listing_url("https://swgoh.gg", "someone", 3),
            "https://swgoh.gg/u/someone/mods/?page=3"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let mut opts = ScrapeOptions::for_user("x");
        opts.base_url = s!("http://localhost:8080/");
        let src = HttpSource::new(&opts).unwrap();
        assert_eq!(src.page_url("x", 1), "http://localhost:8080/u/x/mods/?page=1");
    }
}
