use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("No account history found")]
    EmptyHistory,

    #[error("Couldn't determine account balance: {0}")]
    NoBalanceSeed(#[source] LookupError),

    #[error("Running balance overflows at row {row}")]
    BalanceOverflow { row: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// Failure converting currency text into minor units.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("not a number: {text:?}")]
    NotANumber {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// A problem confined to a single cell. Reconstruction keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("unrecognized date: {0:?}")]
    DateParse(String),

    #[error("bad amount: {0}")]
    MoneyParse(#[from] MoneyError),

    #[error("no handler for column {0:?}")]
    UnknownColumn(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unable to find {selector:?} in page")]
    NotFound { selector: String },

    #[error("element text unavailable: {0}")]
    Text(String),

    #[error("{0}")]
    Money(#[from] MoneyError),
}
