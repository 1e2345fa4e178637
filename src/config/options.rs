// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub count: CountOptions,
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

/// GUI tab routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Tally,
    Progression,
    Comparison,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountOptions {
    pub season: u16,
    pub rounds: usize,
    /// Directory holding `<season>round_data/`.
    pub data_dir: PathBuf,
    /// Names drawn in the comparison chart, checked against the official
    /// count at run time. Defaults to the published official top ten.
    pub comparison: Vec<String>,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            season: DEFAULT_SEASON,
            rounds: DEFAULT_ROUNDS,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            comparison: DEFAULT_COMPARISON.iter().map(|n| s!(*n)).collect(),
        }
    }
}

/// HTTP behavior for the official-count fetch. Certificate validation
/// stays on unless `accept_invalid_certs` is set explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout_secs: u64,
    pub accept_invalid_certs: bool,
    /// Ignore the local cache and fetch live.
    pub refresh: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_secs: HTTP_TIMEOUT_SECS,
            accept_invalid_certs: false,
            refresh: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: false,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// Full output path: `<dir>/<stem>.<ext>`. The format picks the
    /// extension unless the user typed their own (see `set_path`).
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = match &self.out_path.user_ext {
            Some(ext) => ext.as_str(),
            None => self.format.ext(),
        };
        path.push(join!(stem, ".", ext));
        path
    }

    /// Parse typed text into dir + stem. A typed extension sticks and
    /// survives later format changes.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                self.out_path.dir = parent.to_path_buf();
            }
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.user_ext = p.extension().map(|e| e.to_string_lossy().into_owned());
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    user_ext: Option<String>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}
