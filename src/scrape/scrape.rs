// src/scrape/scrape.rs
use std::{
    thread, time::Duration,
    sync::{ mpsc, atomic::{ AtomicU32, Ordering }},
};

use scraper::Html;

use crate::{
    config::options::ScrapeOptions,
    core::net::{ HttpSource, PageSource },
    data::{ Collection, Mod, PageFailure },
    error::{ Result, ScrapeError },
    progress::Progress,
    score::{ self, StatRanges },
    specs::{ mods, pagination },
};

/// What a page worker sends to the aggregator.
/// A page's `Mod`s always arrive before its `Done`.
enum WorkerMsg {
    Mod(Mod),
    Done { page: u32, mods: usize },
    Failed { page: u32, reason: String },
}

/// Fetch page 1 and read "Page X of N". Gates the fan-out; no fallback.
pub fn resolve_page_count<S: PageSource + ?Sized>(source: &S, user: &str) -> Result<u32> {
    let html = source.fetch_page(user, 1)?;
    let pages = pagination::page_count_from_str(&html)?;
    logf!("{user}: {pages} page(s) of mods");
    Ok(pages)
}

/// Collect, score and rank a user's mods over HTTP.
pub fn collect_mods(
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Collection> {
    opts.validate()?;
    let source = HttpSource::new(opts)?;
    collect_mods_with(&source, opts, progress)
}

/// Same as `collect_mods`, against any page source.
///
/// Pages are fetched by a bounded pool of `opts.workers` threads. Every mod
/// goes through one channel to this thread, which alone builds the stat
/// ranges. Scoring starts only after all workers are joined.
pub fn collect_mods_with<S: PageSource + ?Sized>(
    source: &S,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Collection> {
    opts.validate()?;
    let user = opts.user.trim();

    let page_count = match resolve_page_count(source, user) {
        Ok(n) => n,
        Err(e) => {
            loge!("{user}: cannot determine page count: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(e);
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.begin(page_count);
    }

    let workers = opts.workers.min(page_count as usize).max(1);
    let cursor = AtomicU32::new(1);
    let (tx, rx) = mpsc::channel::<WorkerMsg>();

    let mut all_mods: Vec<Mod> = Vec::new();
    let mut ranges = StatRanges::new();
    let mut failed: Vec<PageFailure> = Vec::new();
    // index 0 unused; pages are 1-based
    let mut settled = vec![false; page_count as usize + 1];

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);

        // Spawn workers
        for _ in 0..workers {
            let tx = tx.clone();
            let cursor = &cursor;
            handles.push(scope.spawn(move || {
                loop {
                    let page = cursor.fetch_add(1, Ordering::Relaxed);
                    if page > page_count {
                        break;
                    }
                    run_page(source, user, page, &tx);
                    thread::sleep(polite_pause(opts, page)); // be polite
                }
            }));
        }
        drop(tx); // this thread is the sole receiver now

        // Aggregate until every sender is gone
        for msg in rx {
            match msg {
                WorkerMsg::Mod(m) => {
                    ranges.observe(&m);
                    all_mods.push(m);
                }
                WorkerMsg::Done { page, mods } => {
                    settled[page as usize] = true;
                    logd!("page {page}/{page_count}: {mods} mod(s)");
                    if let Some(p) = progress.as_deref_mut() {
                        p.page_done(page, mods);
                    }
                }
                WorkerMsg::Failed { page, reason } => {
                    settled[page as usize] = true;
                    loge!("page {page}/{page_count}: {reason}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.page_failed(page, &reason);
                    }
                    failed.push(PageFailure { page, reason });
                }
            }
        }

        // Barrier: join everyone before anything reads the ranges.
        for h in handles {
            if h.join().is_err() {
                loge!("a page worker panicked");
            }
        }
    });

    // A worker that panicked mid-page never settled it.
    for page in 1..=page_count {
        if !settled[page as usize] {
            let reason = s!("worker stopped before the page finished");
            loge!("page {page}/{page_count}: {reason}");
            if let Some(p) = progress.as_deref_mut() {
                p.page_failed(page, &reason);
            }
            failed.push(PageFailure { page, reason });
        }
    }

    if failed.len() == page_count as usize {
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        return Err(ScrapeError::NoPagesSucceeded(page_count));
    }
    failed.sort_by_key(|f| f.page);

    let ranges = ranges.freeze();
    for (kind, r) in ranges.sorted() {
        logd!("range {kind:?}: {} ..= {} ({} samples)", r.min, r.max, r.samples);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.scoring(all_mods.len());
    }
    score::score_all(&mut all_mods, &ranges);
    score::rank(&mut all_mods);

    for m in &all_mods {
        logd!(
            "Score: {}, Uid: {}, Slot: {:?}, Set: {:?}, Pips: {}, Level: {}, Character: {}, Primary: {} {}",
            m.total_score, m.uid, m.slot, m.set, m.pips, m.level,
            m.character_name, m.primary_stat.0.kind, m.primary_stat.0.value
        );
    }
    logf!(
        "{user}: ranked {} mod(s) from {}/{} page(s)",
        all_mods.len(),
        page_count as usize - failed.len(),
        page_count
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(Collection {
        user: s!(user),
        page_count,
        mods: all_mods,
        failed_pages: failed,
    })
}

/// Fetch one page and stream its mods to the aggregator one by one.
fn run_page<S: PageSource + ?Sized>(source: &S, user: &str, page: u32, tx: &mpsc::Sender<WorkerMsg>) {
    let msg = match source.fetch_page(user, page) {
        Ok(html) => {
            let doc = Html::parse_document(&html);
            let n = mods::for_each_mod(&doc, page, |m| {
                let _ = tx.send(WorkerMsg::Mod(m));
            });
            WorkerMsg::Done { page, mods: n }
        }
        Err(e) => WorkerMsg::Failed { page, reason: e.to_string() },
    };
    let _ = tx.send(msg);
}

fn polite_pause(opts: &ScrapeOptions, page: u32) -> Duration {
    let jitter = if opts.jitter_ms == 0 { 0 } else { u64::from(page) % opts.jitter_ms };
    Duration::from_millis(opts.request_pause_ms + jitter)
}
