//! Workbook codec: reading via calamine, writing via rust_xlsxwriter

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use rust_xlsxwriter::Workbook as XlsxWorkbook;

use crate::error::{ConvertError, ConvertResult};

/// Read-side handle over an existing workbook file
pub struct WorkbookReader {
    inner: Sheets<BufReader<File>>,
}

impl WorkbookReader {
    /// Open a workbook, auto-detecting the container format
    pub fn open(path: &Path) -> ConvertResult<Self> {
        let inner = open_workbook_auto(path)
            .map_err(|e| ConvertError::Open(format!("{}: {}", path.display(), e)))?;
        Ok(Self { inner })
    }

    /// Names of all sheets, in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names().to_vec()
    }

    /// Read every cell of a sheet as text, row-major.
    ///
    /// Trailing empty cells are trimmed from each row, so a row can come back
    /// shorter than the sheet width.
    pub fn read_rows(&mut self, sheet: &str) -> ConvertResult<Vec<Vec<String>>> {
        let range: Range<Data> = self
            .inner
            .worksheet_range(sheet)
            .map_err(|e| ConvertError::RowRead(sheet.to_string(), e.to_string()))?;

        Ok(range.rows().map(row_to_strings).collect())
    }
}

fn row_to_strings(row: &[Data]) -> Vec<String> {
    let mut cells: Vec<String> = row.iter().map(cell_to_string).collect();
    while cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }
    cells
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#{:?}", e),
    }
}

/// Write-side handle producing a single-sheet workbook
pub struct WorkbookWriter {
    workbook: XlsxWorkbook,
}

impl WorkbookWriter {
    /// Create an in-memory workbook with one default-named sheet
    pub fn new() -> Self {
        let mut workbook = XlsxWorkbook::new();
        workbook.add_worksheet();
        Self { workbook }
    }

    /// Write a text cell at (row, col), both 0-based
    pub fn write_cell(&mut self, row: u32, col: u16, value: &str) -> ConvertResult<()> {
        let worksheet = self
            .workbook
            .worksheet_from_index(0)
            .map_err(|e| ConvertError::Write(e.to_string()))?;
        worksheet
            .write_string(row, col, value)
            .map_err(|e| ConvertError::Write(format!("cell ({}, {}): {}", row, col, e)))?;
        Ok(())
    }

    /// Save the workbook to disk, creating or overwriting the file
    pub fn save(&mut self, path: &Path) -> ConvertResult<()> {
        self.workbook
            .save(path)
            .map_err(|e| ConvertError::Write(format!("{}: {}", path.display(), e)))
    }
}

impl Default for WorkbookWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("hello".into())), "hello");
        assert_eq!(cell_to_string(&Data::Int(42)), "42");
        assert_eq!(cell_to_string(&Data::Float(3.5)), "3.5");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_row_to_strings_trims_trailing_empties() {
        let row = vec![
            Data::String("a".into()),
            Data::Empty,
            Data::String("c".into()),
            Data::Empty,
            Data::Empty,
        ];
        assert_eq!(row_to_strings(&row), vec!["a", "", "c"]);
    }

    #[test]
    fn test_row_to_strings_all_empty() {
        let row = vec![Data::Empty, Data::Empty];
        assert!(row_to_strings(&row).is_empty());
    }
}
