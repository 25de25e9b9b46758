use chrono::NaiveDateTime;

//==============================================================================
// Workbook model
//==============================================================================

/// A fully materialized workbook: every sheet loaded into memory, in
/// file-defined order.
#[derive(Debug, Clone)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

/// One worksheet: the first row of the grid is the header, the rest are
/// data rows. Rows are padded to the sheet's full width, so every row has
/// exactly one cell per header.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// A single cell as inferred by the spreadsheet reader.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Text(String),
    DateTime(NaiveDateTime),
}

//==============================================================================
// Column type inference
//==============================================================================

/// SQLite declared type for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Boolean,
    Timestamp,
    Text,
}

impl ColumnType {
    /// The type name used in the CREATE TABLE statement.
    pub fn sql_decl(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::Timestamp => "TIMESTAMP",
            ColumnType::Text => "TEXT",
        }
    }

    /// Infer a column's declared type by scanning its cells top to bottom.
    ///
    /// Empty cells never constrain the type. Integer and Real widen to
    /// Real; any other mixture collapses to Text. A column with no values
    /// at all is Text.
    pub fn infer<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a CellValue>,
    {
        let mut inferred: Option<ColumnType> = None;

        for cell in cells {
            let ty = match cell {
                CellValue::Null => continue,
                CellValue::Integer(_) => ColumnType::Integer,
                CellValue::Real(_) => ColumnType::Real,
                CellValue::Boolean(_) => ColumnType::Boolean,
                CellValue::DateTime(_) => ColumnType::Timestamp,
                CellValue::Text(_) => ColumnType::Text,
            };

            inferred = Some(match inferred {
                None => ty,
                Some(prev) if prev == ty => ty,
                Some(ColumnType::Integer) if ty == ColumnType::Real => ColumnType::Real,
                Some(ColumnType::Real) if ty == ColumnType::Integer => ColumnType::Real,
                Some(_) => ColumnType::Text,
            });
        }

        inferred.unwrap_or(ColumnType::Text)
    }
}
