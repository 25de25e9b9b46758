use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("source workbook not found: {0}")]
    SourceNotFound(String),

    #[error("workbook parsing error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}
