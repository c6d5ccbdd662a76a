use crate::schema::Series;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BalanceSheetError {
    #[error("Invalid input: the {series} series has no entries")]
    InvalidInput { series: Series },

    #[error("Entry dated {date} in the {series} series does not fall on any month slot")]
    UnmatchedEntry { series: Series, date: DateTime<Utc> },

    #[error("Amount for {date} in the {series} series is outside the representable range")]
    AmountOverflow { series: Series, date: DateTime<Utc> },

    #[error("Expense series is anchored in {expense} but revenue series is anchored in {revenue}")]
    AnchorYearMismatch { expense: i32, revenue: i32 },

    #[error("Date calculation error: {0}")]
    DateError(String),

    #[error("Malformed source: {0}")]
    MalformedSource(#[from] serde_json::Error),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BalanceSheetError>;
