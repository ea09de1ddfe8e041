use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read a numeric value out of a financial-amount token.
///
/// Local to one span: the caller leaves that token untouched and carries on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountError {
    #[error("No digits in amount: {0:?}")]
    MissingDigits(String),

    #[error("Invalid number {text:?}: {source}")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Failure to load the currency abbreviation list.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Abbreviation file is empty: {}", .0.display())]
    Empty(PathBuf),
}
