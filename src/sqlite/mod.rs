//! SQLite writing module
//!
//! Materializes sheets as tables: drop-and-recreate per sheet, declared
//! column types from the reader's inference, one transaction per table.

mod writer;

pub use writer::{derive_table_name, SqliteWriter};
