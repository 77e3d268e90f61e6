//! Conversion job configuration and output-path resolution

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Output file name used when a JSON export does not pick one
pub const DEFAULT_JSON_OUTPUT: &str = "output.json";
/// Output file name used when an Excel export does not pick one
pub const DEFAULT_EXCEL_OUTPUT: &str = "output.xlsx";

const EXCEL_EXTENSION: &str = "xlsx";

/// A fully resolved conversion job: one input path, one output path.
///
/// All defaulting and extension normalization happens here, before the core
/// conversion functions are called.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source file to convert
    pub input: PathBuf,
    /// Destination file, created or overwritten
    pub output: PathBuf,
}

impl Config {
    /// Create a config with both paths already resolved
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }

    /// Resolve a sheet-to-records job; the output defaults to `output.json`
    /// beside the input file.
    pub fn json_export(input: PathBuf, output: Option<PathBuf>) -> Self {
        let output = output.unwrap_or_else(|| sibling(&input, DEFAULT_JSON_OUTPUT));
        Self { input, output }
    }

    /// Resolve a records-to-sheet job; the output defaults to `output.xlsx`
    /// beside the input file, and a chosen output lacking the `.xlsx`
    /// extension gets it appended.
    pub fn excel_export(input: PathBuf, output: Option<PathBuf>) -> Self {
        let output = match output {
            Some(path) => ensure_excel_extension(path),
            None => sibling(&input, DEFAULT_EXCEL_OUTPUT),
        };
        Self { input, output }
    }
}

fn sibling(input: &Path, name: &str) -> PathBuf {
    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

fn ensure_excel_extension(path: PathBuf) -> PathBuf {
    if path.extension().and_then(|ext| ext.to_str()) == Some(EXCEL_EXTENSION) {
        return path;
    }
    let mut raw: OsString = path.into_os_string();
    raw.push(".");
    raw.push(EXCEL_EXTENSION);
    PathBuf::from(raw)
}
