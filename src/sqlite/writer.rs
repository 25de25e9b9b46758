//! SQLite writer implementation - in-memory sheets → database tables

use crate::error::ConvertResult;
use crate::types::{CellValue, ColumnType, Sheet};
use rusqlite::types::{ToSql, ToSqlOutput, Value};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Derive a table name from a sheet name: surrounding whitespace trimmed,
/// internal spaces replaced with underscores.
///
/// Nothing else is normalized. A name the database rejects (embedded
/// quotes, for instance) fails at write time rather than being escaped
/// here.
pub fn derive_table_name(sheet_name: &str) -> String {
    sheet_name.trim().replace(' ', "_")
}

/// Scoped writer around a SQLite connection.
///
/// The connection is released when the writer drops, on success and error
/// paths alike; `close` surfaces close-time errors on the happy path.
pub struct SqliteWriter {
    conn: Connection,
    path: PathBuf,
}

impl SqliteWriter {
    /// Open the destination database, creating the file if absent.
    pub fn open<P: AsRef<Path>>(path: P) -> ConvertResult<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path)?;
        Ok(Self { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one sheet as a table, replacing any existing table of the
    /// same name. The drop, create, and inserts run in one transaction,
    /// so a replaced table is never left half-written.
    ///
    /// Returns the derived table name.
    pub fn write_sheet(&mut self, sheet: &Sheet) -> ConvertResult<String> {
        let table_name = derive_table_name(&sheet.name);

        let tx = self.conn.transaction()?;

        tx.execute_batch(&format!("DROP TABLE IF EXISTS \"{table_name}\""))?;

        let columns: Vec<String> = sheet
            .headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let ty = ColumnType::infer(sheet.rows.iter().filter_map(move |row| row.get(idx)));
                format!("\"{header}\" {}", ty.sql_decl())
            })
            .collect();
        tx.execute_batch(&format!(
            "CREATE TABLE \"{table_name}\" ({})",
            columns.join(", ")
        ))?;

        if !sheet.rows.is_empty() {
            let placeholders = vec!["?"; sheet.headers.len()].join(", ");
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO \"{table_name}\" VALUES ({placeholders})"
            ))?;
            for row in &sheet.rows {
                stmt.execute(rusqlite::params_from_iter(row.iter()))?;
            }
        }

        tx.commit()?;
        Ok(table_name)
    }

    /// Close the connection explicitly, surfacing any close-time error.
    pub fn close(self) -> ConvertResult<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}

impl ToSql for CellValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            CellValue::Null => Ok(ToSqlOutput::Owned(Value::Null)),
            CellValue::Integer(i) => i.to_sql(),
            CellValue::Real(f) => f.to_sql(),
            CellValue::Boolean(b) => b.to_sql(),
            CellValue::Text(s) => s.to_sql(),
            CellValue::DateTime(dt) => dt.to_sql(),
        }
    }
}
