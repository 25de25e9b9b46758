use clap::{Parser, Subcommand};
use colored::Colorize;
use sheetlite::cli;
use sheetlite::error::ConvertResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetlite")]
#[command(about = "Convert Excel workbooks into SQLite databases, one table per sheet.")]
#[command(long_about = "Sheetlite - Excel → SQLite batch converter

Reads every sheet of an .xlsx workbook and writes it to a SQLite database
as a table, replacing any table of the same name.

COMMANDS:
  convert  - Write every sheet of a workbook into a SQLite database
  sheets   - List a workbook's sheets without writing anything

EXAMPLES:
  sheetlite convert db.xlsx data.db       # One table per sheet
  sheetlite convert db.xlsx data.db -v    # Show per-sheet detail
  sheetlite sheets db.xlsx                # Preview the sheet → table mapping")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert a workbook into a SQLite database.

Every sheet becomes one table, named after the sheet with surrounding
whitespace trimmed and internal spaces replaced by underscores. Existing
tables of the same name are dropped and recreated, never appended to.

Declared column types follow the spreadsheet reader's inference: integer
columns become INTEGER, numeric columns REAL, boolean columns BOOLEAN,
datetime columns TIMESTAMP, everything else TEXT.

The database file is created if it does not exist. Tables written before
a failing sheet stay committed; the run is not transactional as a whole.")]
    /// Convert a workbook into a SQLite database (one table per sheet)
    Convert {
        /// Path to the source workbook (.xlsx)
        workbook: PathBuf,

        /// Path to the destination SQLite database (created if absent)
        database: PathBuf,

        /// Show per-sheet detail while converting
        #[arg(short, long)]
        verbose: bool,
    },

    /// List a workbook's sheets and the tables they would map to
    Sheets {
        /// Path to the source workbook (.xlsx)
        workbook: PathBuf,
    },
}

fn run(cli: Cli) -> ConvertResult<()> {
    match cli.command {
        Commands::Convert {
            workbook,
            database,
            verbose,
        } => cli::convert(workbook, database, verbose),

        Commands::Sheets { workbook } => cli::sheets(workbook),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {e}", "❌ Error:".bold().red());
        std::process::exit(1);
    }
}
