//! Error taxonomy for conversion calls

use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Everything that can abort a conversion. Each variant renders as a single
/// human-readable message; all are terminal for the current call.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The destination directory rejected the write-permission probe.
    #[error("no write permission for destination: {0}")]
    PermissionDenied(String),

    /// The input file could not be opened or read.
    #[error("failed to open input: {0}")]
    Open(String),

    #[error("workbook contains no sheets")]
    EmptyWorkbook,

    /// Fewer than a header row plus one data row.
    #[error("sheet '{0}' has no data rows")]
    InsufficientRows(String),

    #[error("failed to read rows from sheet '{0}': {1}")]
    RowRead(String, String),

    #[error("failed to encode records as JSON: {0}")]
    Serialize(String),

    #[error("failed to decode JSON records: {0}")]
    Decode(String),

    /// The structured-text input did not carry the expected extension.
    #[error("expected a .json input file: {0}")]
    ExtensionMismatch(String),

    /// Writing or saving the output failed.
    #[error("failed to write output: {0}")]
    Write(String),
}
