use thiserror::Error;

/// Errors that can occur while reading credentials or talking to the database
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Missing key in credentials: {key}")]
    MissingCredential { key: &'static str },

    #[error("Malformed credentials line {line}: expected key=value")]
    MalformedCredentials { line: usize },

    #[error("Query produced no result set")]
    NoResultSet,

    #[error("ODBC error: {0}")]
    Odbc(#[from] odbc_api::Error),

    #[error(transparent)]
    Sheet(#[from] sccmkit_sheet::SheetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DbError>;
