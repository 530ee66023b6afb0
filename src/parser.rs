//! Strict parser for payout report text.
//!
//! Accepts comma-delimited rows with a header naming exactly the fields
//! `{date, name, amount}` (in any order) and fails fast on the first bad
//! header or row. No partial report ever escapes a failed parse.

use crate::entry::PayoutEntry;
use crate::error::ParseError;
use crate::report::PayoutReport;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Field names every report header must carry, as an unordered set.
const REQUIRED_FIELDS: [&str; 3] = ["date", "name", "amount"];

/// Date format accepted for the `date` field (ISO-8601 calendar date).
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One raw data row, fields mapped by header name rather than by position.
///
/// All fields are kept as strings here so that date and amount parsing
/// failures are reported per-row with the offending text.
#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    name: String,
    amount: String,
}

impl RawRecord {
    /// Converts the raw row into a validated [`PayoutEntry`].
    ///
    /// `row` is the 1-indexed source line number used in error messages.
    fn into_entry(self, row: usize) -> Result<PayoutEntry, ParseError> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|source| {
            ParseError::MalformedDate {
                row,
                value: self.date.clone(),
                source,
            }
        })?;

        let amount: i64 = self.amount.parse().map_err(|source| {
            ParseError::MalformedAmount {
                row,
                value: self.amount.clone(),
                source,
            }
        })?;

        PayoutEntry::new(date, self.name, amount)
            .validate()
            .map_err(|source| ParseError::Validation { row, source })
    }
}

/// Strict payout report parser.
///
/// Pure function of its text input: parsing has no side effects and two
/// parses of the same input yield the same result.
#[derive(Debug, Default)]
pub struct StrictReportParser;

impl StrictReportParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        StrictReportParser
    }

    /// Parses the complete text of one payout report.
    ///
    /// The first row must name exactly the field set `{date, name, amount}`,
    /// case-sensitively but in any order. Each data row is mapped by header
    /// name, its date and amount parsed strictly, and the resulting entry
    /// validated. The first failure aborts the parse.
    pub fn parse(&self, text: &str) -> Result<PayoutReport, ParseError> {
        let mut reader = ReaderBuilder::new().from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let required: BTreeSet<&str> = REQUIRED_FIELDS.iter().copied().collect();
        let found: BTreeSet<&str> = headers.iter().collect();
        if headers.len() != REQUIRED_FIELDS.len() || found != required {
            return Err(ParseError::FieldSetMismatch {
                found: headers.iter().map(str::to_string).collect(),
            });
        }

        let mut entries = Vec::new();

        for (row_idx, result) in reader.deserialize::<RawRecord>().enumerate() {
            let row = row_idx + 2; // 1-indexed, accounting for header row
            let record = result?;
            entries.push(record.into_entry(row)?);
        }

        Ok(PayoutReport::new(entries))
    }
}
