// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::rows_to_string;

/// Write one export file per ExportOptions (path, headers policy,
/// delimiter). Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = export.include_headers.then_some(headers);
    let contents = rows_to_string(rows, headers, export.delim());

    fs::write(&path, contents)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
