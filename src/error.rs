//! Error types for the cash register.

use thiserror::Error;

/// Result type alias for register operations
pub type Result<T> = std::result::Result<T, ChangeError>;

/// Errors that can occur while computing change.
#[derive(Error, Debug)]
pub enum ChangeError {
    /// A field does not look like a decimal currency amount
    #[error("Line {line}: invalid amount \"{raw}\"")]
    MalformedAmount { line: usize, raw: String },

    /// A non-blank line is not exactly `owed,paid`
    #[error("Line {line}: expected \"owed,paid\"")]
    MalformedLine { line: usize },

    /// Paid amount is strictly less than the owed amount
    #[error("Line {line}: paid amount is less than owed amount")]
    InsufficientPayment { line: usize },

    /// Denomination table cannot guarantee exact change
    #[error("Invalid denomination table: {0}")]
    InvalidDenominations(String),

    /// Exchange rate must be strictly positive
    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),

    /// Failed to open or read a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV report writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file is not valid JSON for the expected shape
    #[error("Configuration error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: cash-register <input.txt> [--config <config.json>] [--report]")]
    MissingArgument,

    /// A flag was given without the value it takes
    #[error("Missing value for {0}")]
    MissingOptionValue(String),

    /// Unrecognised command line argument
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

/// Rejection of a single amount field, before a line number is known.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid amount \"{raw}\"")]
pub struct ParseAmountError {
    pub raw: String,
}

impl ParseAmountError {
    /// Attaches the offending line number.
    pub fn at_line(self, line: usize) -> ChangeError {
        ChangeError::MalformedAmount {
            line,
            raw: self.raw,
        }
    }
}
