//! Error types for payout report parsing, validation, and retrieval.

use thiserror::Error;

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while parsing one report's raw text.
///
/// Parsing is fail-fast: the first error aborts the whole parse and no
/// partial report is produced.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input contained no header row at all.
    #[error("empty input: no header row")]
    EmptyInput,

    /// The header row's field names do not equal the required set.
    #[error("field set mismatch: required {{date, name, amount}} but found {{{}}}", .found.join(", "))]
    FieldSetMismatch {
        /// Field names actually present in the header, in header order.
        found: Vec<String>,
    },

    /// A row's date field is not a valid `YYYY-MM-DD` calendar date.
    #[error("row {row}: malformed date {value:?}: {source}")]
    MalformedDate {
        row: usize,
        value: String,
        source: chrono::ParseError,
    },

    /// A row's amount field is not a valid base-10 integer.
    #[error("row {row}: malformed amount {value:?}: {source}")]
    MalformedAmount {
        row: usize,
        value: String,
        source: std::num::ParseIntError,
    },

    /// A row parsed structurally but the resulting entry failed validation.
    #[error("row {row}: {source}")]
    Validation {
        row: usize,
        source: ValidationError,
    },

    /// The underlying CSV record was structurally malformed (e.g. a row whose
    /// field count differs from the header's).
    #[error("malformed record: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised when validating an already-constructed [`PayoutEntry`].
///
/// [`PayoutEntry`]: crate::PayoutEntry
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Payout amounts must be non-negative.
    #[error("invalid payout entry: negative amount {amount}")]
    NegativeAmount { amount: i64 },
}

/// Errors raised by the external report source.
///
/// Never produced by the parser; a fetch failure and a parse failure are
/// distinct kinds at every level.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP request itself failed (connection, timeout, bad body).
    #[error("report {index}: request failed: {source}")]
    Request {
        index: u32,
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("report {index}: server returned status {status}")]
    Status {
        index: u32,
        status: reqwest::StatusCode,
    },
}

/// Top-level error for a reporting run.
///
/// Every failure is attributable to the numbered report it came from.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Fetching a numbered report failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A fetched report failed to parse.
    #[error("report {index}: {source}")]
    Parse { index: u32, source: ParseError },
}
