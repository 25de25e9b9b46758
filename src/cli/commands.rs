use crate::error::{ConvertError, ConvertResult};
use crate::excel::WorkbookReader;
use crate::sqlite::{derive_table_name, SqliteWriter};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Resolve a path to its absolute form without requiring it to exist
fn resolve(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Execute the convert command
pub fn convert(workbook: PathBuf, database: PathBuf, verbose: bool) -> ConvertResult<()> {
    println!("{}", "🗂  Sheetlite - Workbook → SQLite".bold().green());
    println!("   Input:  {}", workbook.display());
    println!("   Output: {}\n", database.display());

    // The source must exist before anything touches the database file.
    if !workbook.is_file() {
        return Err(ConvertError::SourceNotFound(
            resolve(&workbook).display().to_string(),
        ));
    }

    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }

    let loaded = WorkbookReader::new(&workbook).read()?;

    if verbose {
        println!("   Found {} sheets\n", loaded.sheet_count());
    }

    let mut writer = SqliteWriter::open(&database)?;

    let mut written = 0usize;
    let mut skipped = 0usize;
    for sheet in &loaded.sheets {
        if sheet.headers.is_empty() {
            println!(
                "   {} sheet '{}' has no cells, skipped",
                "⚠️".yellow(),
                sheet.name
            );
            skipped += 1;
            continue;
        }

        println!(
            "   📊 Writing sheet '{}' → table '{}' ({} rows, {} columns)",
            sheet.name.bright_blue(),
            derive_table_name(&sheet.name).cyan(),
            sheet.row_count(),
            sheet.column_count()
        );

        // A failure here drops the writer (releasing the connection)
        // before the error surfaces; earlier tables stay committed.
        writer.write_sheet(sheet)?;
        written += 1;
    }

    let resolved_db = resolve(writer.path());
    writer.close()?;

    println!();
    println!("{}", "✅ Conversion Complete!".bold().green());
    if skipped > 0 {
        println!("   {written} tables written, {skipped} sheets skipped");
    } else {
        println!("   {written} tables written");
    }
    println!("   Database: {}\n", resolved_db.display());

    Ok(())
}

/// Execute the sheets command
pub fn sheets(workbook: PathBuf) -> ConvertResult<()> {
    println!("{}", "🗂  Sheetlite - Workbook Sheets".bold().green());
    println!("   File: {}\n", workbook.display());

    if !workbook.is_file() {
        return Err(ConvertError::SourceNotFound(
            resolve(&workbook).display().to_string(),
        ));
    }

    let loaded = WorkbookReader::new(&workbook).read()?;

    for sheet in &loaded.sheets {
        println!(
            "   📄 {} → {} ({} rows, {} columns)",
            sheet.name.bright_blue(),
            derive_table_name(&sheet.name).cyan(),
            sheet.row_count(),
            sheet.column_count()
        );
    }
    println!("\n   {} sheets total\n", loaded.sheet_count());

    Ok(())
}
