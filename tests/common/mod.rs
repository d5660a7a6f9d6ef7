// tests/common/mod.rs
//
// In-memory listing pages for driving the pipeline without a network.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use mod_scrape::config::options::ScrapeOptions;
use mod_scrape::core::PageSource;
use mod_scrape::FetchError;

pub fn card(uid: &str, level: u8, pips: u8, secondaries: &[(&str, &str)]) -> String {
    let pip_html = "<span class=\"statmod-pip\"></span>".repeat(pips as usize);
    let stats: String = secondaries
        .iter()
        .map(|(label, value)| {
            format!(
                "<div class=\"statmod-stat\"><span class=\"statmod-stat-label\">{label}</span>\
                 <span class=\"statmod-stat-value\">{value}</span></div>"
            )
        })
        .collect();
    format!(
        r#"<div class="collection-mod" data-id="{uid}">
             <img class="statmod-img" src="/static/img/statmodmystery_4_5.png">
             <div class="pips">{pip_html}</div>
             <span class="statmod-level">{level}</span>
             <div class="char-portrait" title="Owner {uid}"></div>
             <div class="statmod-stats-1"><div class="statmod-stat">
               <span class="statmod-stat-label">Speed</span><span class="statmod-stat-value">+30</span>
             </div></div>
             <div class="statmod-stats-2">{stats}</div>
           </div>"#
    )
}

pub fn page(page: u32, of: u32, cards: &[String]) -> String {
    format!(
        r#"<html><body>
             <div class="pull-right"><ul class="pagination">
               <li><a href="?page={page}">Page {page} of {of}</a></li>
             </ul></div>
             <div class="collection">{}</div>
           </body></html>"#,
        cards.join("\n")
    )
}

/// Serves canned pages. Pages listed in `failing` error for workers
/// (page 1 still answers the first, count-resolving request).
#[derive(Default)]
pub struct FakeSite {
    pub pages: HashMap<u32, String>,
    pub failing: HashSet<u32>,
    pub delay: HashMap<u32, Duration>,
    pub fail_after_first: bool,
    pub calls: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub fetched: Mutex<Vec<u32>>,
}

impl FakeSite {
    pub fn new(pages: Vec<String>) -> Self {
        Self {
            pages: pages.into_iter().enumerate().map(|(i, p)| (i as u32 + 1, p)).collect(),
            ..Default::default()
        }
    }
}

impl PageSource for FakeSite {
    fn fetch_page(&self, _user: &str, page: u32) -> Result<String, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.fetched.lock().unwrap().push(page);

        if let Some(d) = self.delay.get(&page) {
            thread::sleep(*d);
        }

        let result = if call > 0 && (self.fail_after_first || self.failing.contains(&page)) {
            Err(FetchError::Status { page, status: 503 })
        } else {
            self.pages
                .get(&page)
                .cloned()
                .ok_or(FetchError::Status { page, status: 404 })
        };
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

pub fn opts(workers: usize) -> ScrapeOptions {
    let mut o = ScrapeOptions::for_user("tester");
    o.workers = workers;
    o.request_pause_ms = 0;
    o.jitter_ms = 0;
    o
}
