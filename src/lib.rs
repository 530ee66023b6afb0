//! # Payout Reporter
//!
//! A strict parser and aggregator for numbered payout reports: fetch each
//! report's raw text, parse it into validated entries, filter by date, and
//! total the amounts.
//!
//! ## Design Principles
//!
//! - **Strict parsing**: the header must name exactly `{date, name, amount}`
//!   (any order); the first bad row aborts the whole parse
//! - **Validated entries**: no entry with a negative amount ever escapes the
//!   parser
//! - **Pure queries**: `filter` and `sum` never mutate a report
//! - **Attributable errors**: every fetch or parse failure names the report
//!   index it came from
//!
//! ## Example
//!
//! ```
//! use payout_reporter::StrictReportParser;
//!
//! let text = "date,name,amount\n2025-05-05,Johnathon Reichert,1389\n";
//! let report = StrictReportParser::new().parse(text).unwrap();
//! assert_eq!(report.sum(), 1389);
//! ```

pub mod aggregate;
pub mod entry;
pub mod error;
pub mod fetch;
pub mod parser;
pub mod report;

pub use aggregate::{total_for_date, REPORT_RANGE};
pub use entry::PayoutEntry;
pub use error::{FetchError, ParseError, ReportError, Result, ValidationError};
pub use fetch::{HttpReportSource, ReportSource};
pub use parser::StrictReportParser;
pub use report::PayoutReport;
