//! Aggregation of payout totals across numbered reports.
//!
//! The driver core: fetch each report in ascending index order, parse it
//! strictly, filter its entries to the target date, and accumulate the sum.
//! Sequential and deterministic; any failure aborts the run with the failing
//! report's index attached.

use crate::error::{ReportError, Result};
use crate::fetch::ReportSource;
use crate::parser::StrictReportParser;
use chrono::NaiveDate;
use log::debug;
use std::ops::RangeInclusive;

/// Report indices published by the deployed service.
pub const REPORT_RANGE: RangeInclusive<u32> = 1..=100;

/// Sums the payout amounts dated `date` across the given numbered reports.
///
/// Reports are fetched and parsed one at a time in ascending index order, so
/// at most one report's text is in memory at once and the total is
/// reproducible. Returns the first fetch or parse error encountered.
pub fn total_for_date<S>(source: &S, date: NaiveDate, reports: RangeInclusive<u32>) -> Result<i64>
where
    S: ReportSource,
{
    let parser = StrictReportParser::new();
    let mut total = 0i64;

    for index in reports {
        let text = source.fetch(index)?;
        let report = parser
            .parse(&text)
            .map_err(|source| ReportError::Parse { index, source })?;

        let matching = report.filter(|entry| entry.date == date);
        debug!(
            "report {}: {} of {} entries match {}",
            index,
            matching.len(),
            report.len(),
            date
        );

        total += matching.sum();
    }

    Ok(total)
}
