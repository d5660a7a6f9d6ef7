// tests/export_e2e.rs
mod common;

use std::fs;
use std::path::PathBuf;

use common::*;
use mod_scrape::collect_mods_with;
use mod_scrape::config::options::{ExportFormat, ExportOptions};
use mod_scrape::file::write_export;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("mod_scrape_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn collection() -> mod_scrape::Collection {
    let site = FakeSite::new(vec![page(1, 1, &[
        card("low", 15, 5, &[("Speed", "+2")]),
        card("high", 15, 5, &[("Speed", "+8")]),
    ])]);
    collect_mods_with(&site, &opts(1), None).unwrap()
}

#[test]
fn csv_into_directory_hint() {
    let dir = tmp_dir("csv_dir");
    let mut opts = ExportOptions { format: ExportFormat::Csv, include_headers: true, ..Default::default() };
    opts.set_path(&format!("{}/", dir.join("nested").display()));

    let written = write_export(&opts, &collection()).unwrap().unwrap();
    assert!(written.ends_with("nested/mods.csv"));

    let s = fs::read_to_string(&written).unwrap();
    let lines: Vec<_> = s.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Rank,Score,Id"));
    assert!(lines[1].starts_with("1,100,high,"));
    assert!(lines[2].starts_with("2,0,low,"));
}

#[test]
fn json_file_round_trips_through_serde_json() {
    let dir = tmp_dir("json");
    let mut opts = ExportOptions { format: ExportFormat::Json, ..Default::default() };
    let target = dir.join("ranked.json");
    opts.set_path(target.to_str().unwrap());

    let written = write_export(&opts, &collection()).unwrap();
    assert_eq!(written.as_deref(), Some(target.as_path()));

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(v["user"], "tester");
    assert_eq!(v["mods"][0]["uid"], "high");
    assert_eq!(v["mods"][0]["secondaryStats"][0]["score"], 100);
    assert_eq!(v["failedPages"].as_array().unwrap().len(), 0);
}

#[test]
fn file_in_place_of_directory_is_rejected() {
    let dir = tmp_dir("not_a_dir");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "x").unwrap();

    let opts = ExportOptions {
        format: ExportFormat::Tsv,
        out: Some(blocker.join("mods.tsv")),
        ..Default::default()
    };
    let err = write_export(&opts, &collection()).unwrap_err();
    assert!(matches!(err, mod_scrape::ExportError::NotADirectory(_)));
}
