//! Sheetlite - Excel workbook to SQLite converter
//!
//! This library reads every sheet of an .xlsx workbook and writes each one
//! to a SQLite database as a table, replacing any table of the same name.
//!
//! # Features
//!
//! - One table per sheet, in the workbook's declared order
//! - Table names derived from sheet names (trim + spaces to underscores)
//! - Declared column types from the reader's inference (INTEGER, REAL,
//!   BOOLEAN, TIMESTAMP, TEXT)
//! - Full replace semantics: existing tables are dropped, never appended to
//!
//! # Example
//!
//! ```no_run
//! use sheetlite::excel::WorkbookReader;
//! use sheetlite::sqlite::SqliteWriter;
//!
//! let workbook = WorkbookReader::new("db.xlsx").read()?;
//! let mut writer = SqliteWriter::open("data.db")?;
//!
//! for sheet in &workbook.sheets {
//!     let table = writer.write_sheet(sheet)?;
//!     println!("{} -> {} ({} rows)", sheet.name, table, sheet.row_count());
//! }
//!
//! writer.close()?;
//! # Ok::<(), sheetlite::error::ConvertError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod sqlite;
pub mod types;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult};
pub use types::{CellValue, ColumnType, Sheet, Workbook};
