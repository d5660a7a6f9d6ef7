// src/file.rs

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::data::Collection;
use crate::error::ExportError;
use crate::export::render;

/// Render and write according to `ExportOptions`.
/// Returns the file written, or None when the output went to stdout.
pub fn write_export(
    export: &ExportOptions,
    collection: &Collection,
) -> Result<Option<PathBuf>, ExportError> {
    let contents = render(collection, export)?;

    match export.out_path() {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            fs::write(path, contents)?;
            logf!("Wrote {}", path.display());
            Ok(Some(path.to_path_buf()))
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(contents.as_bytes())?;
            out.flush()?;
            Ok(None)
        }
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
