//! Workbook reader implementation - Excel (.xlsx) → in-memory model

use crate::error::ConvertResult;
use crate::types::{CellValue, Sheet, Workbook};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// Workbook reader for converting .xlsx files to the in-memory model
pub struct WorkbookReader {
    path: PathBuf,
}

impl WorkbookReader {
    /// Create a new workbook reader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load every sheet into memory.
    ///
    /// The first row of each sheet becomes its header; empty header cells
    /// fall back to a positional `col_{index}` name. Parse failures
    /// propagate before anything is written downstream.
    pub fn read(&self) -> ConvertResult<Workbook> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)?;

        let sheet_names = workbook.sheet_names().to_vec();
        let mut sheets = Vec::with_capacity(sheet_names.len());

        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name)?;
            sheets.push(Self::materialize_sheet(&sheet_name, &range));
        }

        Ok(Workbook { sheets })
    }

    /// Materialize a single worksheet grid
    fn materialize_sheet(name: &str, range: &Range<Data>) -> Sheet {
        let (height, width) = range.get_size();

        if height == 0 || width == 0 {
            // No cells at all: the caller decides what to do with a
            // column-less sheet.
            return Sheet {
                name: name.to_string(),
                headers: Vec::new(),
                rows: Vec::new(),
            };
        }

        // Header row (row 0). Non-string cells are stringified.
        let mut headers = Vec::with_capacity(width);
        for col in 0..width {
            let header = match range.get((0, col)) {
                Some(Data::Empty) | None => format!("col_{col}"),
                Some(Data::String(s)) if s.trim().is_empty() => format!("col_{col}"),
                Some(Data::String(s)) => s.clone(),
                Some(cell) => cell.to_string(),
            };
            headers.push(header);
        }

        // Data rows, padded to the sheet's full width so every row lines
        // up with the header.
        let mut rows = Vec::with_capacity(height - 1);
        for row in 1..height {
            let mut cells = Vec::with_capacity(width);
            for col in 0..width {
                let cell = range
                    .get((row, col))
                    .map_or(CellValue::Null, Self::convert_cell);
                cells.push(cell);
            }
            rows.push(cells);
        }

        Sheet {
            name: name.to_string(),
            headers,
            rows,
        }
    }

    /// Map a calamine cell onto the model. Spreadsheet error cells (#DIV/0!
    /// and friends) read as NULL.
    fn convert_cell(cell: &Data) -> CellValue {
        match cell {
            Data::Empty => CellValue::Null,
            Data::Int(i) => CellValue::Integer(*i),
            Data::Float(f) => CellValue::Real(*f),
            Data::Bool(b) => CellValue::Boolean(*b),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::DateTime(dt) => dt
                .as_datetime()
                .map(CellValue::DateTime)
                .unwrap_or(CellValue::Null),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(_) => CellValue::Null,
        }
    }
}
