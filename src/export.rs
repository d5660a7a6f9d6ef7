// src/export.rs
//! Shape a ranked `Collection` for output: flat rows (CSV/TSV), an aligned
//! text table, or JSON.

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::rows_to_string;
use crate::data::{Collection, Mod, SecondaryStat};

pub const HEADERS: [&str; 11] = [
    "Rank", "Score", "Id", "Set", "Slot", "Pips", "Level", "Character",
    "Primary", "Primary value", "Secondaries",
];

fn fmt_value(v: f64) -> String {
    // 15.0 → "15", 1.25 → "1.25"
    format!("{v}")
}

fn fmt_secondary(s: &SecondaryStat) -> String {
    let label = if s.stat.kind.is_empty() { "?" } else { s.stat.kind.as_str() };
    match s.score {
        Some(score) => format!("{label}={} ({score})", fmt_value(s.stat.value)),
        None => format!("{label}={} (-)", fmt_value(s.stat.value)),
    }
}

fn opt_name<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

pub fn to_row(rank: usize, m: &Mod) -> Vec<String> {
    vec![
        rank.to_string(),
        m.total_score.to_string(),
        m.uid.clone(),
        opt_name(m.set),
        opt_name(m.slot),
        m.pips.to_string(),
        m.level.to_string(),
        m.character_name.clone(),
        m.primary_stat.0.kind.clone(),
        fmt_value(m.primary_stat.0.value),
        m.secondary_stats.iter().map(fmt_secondary).collect::<Vec<_>>().join("; "),
    ]
}

/// Rows in ranked order, 1-based rank. `top` keeps only the first N.
pub fn to_rows(mods: &[Mod], top: Option<usize>) -> Vec<Vec<String>> {
    let n = top.unwrap_or(mods.len()).min(mods.len());
    mods[..n].iter().enumerate().map(|(i, m)| to_row(i + 1, m)).collect()
}

pub fn headers() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}

/// Left-aligned columns separated by two spaces; the header is always shown.
pub fn to_table(rows: &[Vec<String>]) -> String {
    let headers = headers();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for r in rows {
        for (i, cell) in r.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: &[String]| {
        let last = cells.len().saturating_sub(1);
        for (i, cell) in cells.iter().enumerate() {
            if i == last {
                out.push_str(cell);
            } else {
                out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
        }
        out.push('\n');
    };
    push_line(&headers);
    for r in rows {
        push_line(r);
    }
    out
}

/// Render the collection according to `opts`.
pub fn render(collection: &Collection, opts: &ExportOptions) -> Result<String, serde_json::Error> {
    let rows = to_rows(&collection.mods, opts.top);
    Ok(match opts.format {
        ExportFormat::Table => to_table(&rows),
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = opts.format.delim().unwrap_or(',');
            let headers = headers();
            let h = opts.include_headers.then_some(headers.as_slice());
            rows_to_string(h, &rows, sep)
        }
        ExportFormat::Json => {
            let n = opts.top.unwrap_or(collection.mods.len()).min(collection.mods.len());
            let view = Collection { mods: collection.mods[..n].to_vec(), ..collection.clone() };
            let mut s = serde_json::to_string_pretty(&view)?;
            s.push('\n');
            s
        }
    })
}
