//! Core conversions between worksheets and JSON record files

use std::fs;
use std::path::Path;

use crate::codec::excel::{WorkbookReader, WorkbookWriter};
use crate::codec::json;
use crate::error::{ConvertError, ConvertResult};
use crate::model::{derive_header, Record, RecordSet};
use crate::probe::check_write_permission;

/// Convert the first sheet of a workbook into a JSON array of records.
///
/// Row 0 names the fields; every later row becomes one record. The
/// destination directory is probed for write access before any other work,
/// so a denied write surfaces before the workbook is even opened.
pub fn sheet_to_records(input: &Path, output: &Path) -> ConvertResult<()> {
    check_write_permission(output)?;

    let mut workbook = WorkbookReader::open(input)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ConvertError::EmptyWorkbook)?;

    let rows = workbook.read_rows(&sheet)?;
    if rows.len() < 2 {
        return Err(ConvertError::InsufficientRows(sheet));
    }

    let records = rows_to_records(&rows[0], &rows[1..]);

    let bytes = json::encode(&records)?;
    fs::write(output, bytes)
        .map_err(|e| ConvertError::Write(format!("{}: {}", output.display(), e)))
}

/// Rebuild a single-sheet workbook from a JSON array of records.
///
/// The header is derived from the first record's fields; a record missing a
/// header field yields a blank cell, and fields appearing only in later
/// records are dropped. An empty record set saves a blank sheet.
pub fn records_to_sheet(input: &Path, output: &Path) -> ConvertResult<()> {
    if input.extension().and_then(|ext| ext.to_str()) != Some(json::EXTENSION) {
        return Err(ConvertError::ExtensionMismatch(
            input.display().to_string(),
        ));
    }

    let bytes =
        fs::read(input).map_err(|e| ConvertError::Open(format!("{}: {}", input.display(), e)))?;
    let records = json::decode(&bytes)?;

    let mut writer = WorkbookWriter::new();
    if let Some(header) = derive_header(&records) {
        for (col, field) in header.iter().enumerate() {
            writer.write_cell(0, col as u16, field)?;
        }
        for (row, record) in records.iter().enumerate() {
            for (col, field) in header.iter().enumerate() {
                let value = record.get(field).unwrap_or("");
                writer.write_cell(row as u32 + 1, col as u16, value)?;
            }
        }
    }
    writer.save(output)
}

/// Zip each data row against the header.
///
/// Cells beyond the header's length are dropped; a row shorter than the
/// header yields a record missing those trailing fields, not an empty-string
/// fill.
fn rows_to_records(header: &[String], rows: &[Vec<String>]) -> RecordSet {
    rows.iter()
        .map(|row| {
            row.iter()
                .zip(header)
                .map(|(cell, field)| (field.clone(), cell.clone()))
                .collect::<Record>()
        })
        .collect()
}
