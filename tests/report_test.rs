//! Integration tests for the payout report library surface.
//!
//! Exercises the strict parser, the report queries, and the aggregation core
//! through the crate's public API only.

use chrono::NaiveDate;
use payout_reporter::{
    total_for_date, FetchError, ParseError, PayoutEntry, PayoutReport, ReportError, ReportSource,
    StrictReportParser,
};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn parse(text: &str) -> Result<PayoutReport, ParseError> {
    StrictReportParser::new().parse(text)
}

// ==================== PARSER ====================

#[test]
fn test_parse_success_two_entries_in_source_order() {
    let report = parse(
        "date,name,amount\n\
         2025-05-05,Johnathon Reichert,1389\n\
         2025-05-03,Martina Leuschke,814\n",
    )
    .unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(
        report.entries()[0],
        PayoutEntry::new(date("2025-05-05"), "Johnathon Reichert", 1389)
    );
    assert_eq!(
        report.entries()[1],
        PayoutEntry::new(date("2025-05-03"), "Martina Leuschke", 814)
    );
}

#[test]
fn test_header_permutations_parse_identically() {
    let canonical = parse("date,name,amount\n2025-05-05,Alice,7\n").unwrap();

    for header_and_row in [
        "date,amount,name\n2025-05-05,7,Alice\n",
        "name,date,amount\nAlice,2025-05-05,7\n",
        "name,amount,date\nAlice,7,2025-05-05\n",
        "amount,date,name\n7,2025-05-05,Alice\n",
        "amount,name,date\n7,Alice,2025-05-05\n",
    ] {
        assert_eq!(parse(header_and_row).unwrap(), canonical);
    }
}

#[test]
fn test_empty_input_is_empty_input_error() {
    assert!(matches!(parse("").unwrap_err(), ParseError::EmptyInput));
}

#[test]
fn test_unrelated_fields_are_field_set_mismatch() {
    let err = parse("color,brand,size\nblue,x,large\n").unwrap_err();
    assert!(matches!(err, ParseError::FieldSetMismatch { .. }));

    // The message must name the required set and the found set.
    let msg = err.to_string();
    assert!(msg.contains("date, name, amount"), "bad message: {}", msg);
    assert!(msg.contains("color"), "bad message: {}", msg);
}

#[test]
fn test_negative_amount_is_validation_error() {
    let err = parse("date,name,amount\n2025-05-05,Alice,-2\n").unwrap_err();
    assert!(matches!(err, ParseError::Validation { row: 2, .. }));
}

#[test]
fn test_second_bad_row_fails_whole_parse() {
    // Fail-fast: no report containing only the first (valid) row.
    let result = parse(
        "date,name,amount\n\
         2025-05-05,Alice,7\n\
         never,Bob,8\n",
    );
    assert!(matches!(
        result.unwrap_err(),
        ParseError::MalformedDate { row: 3, .. }
    ));
}

// ==================== REPORT QUERIES ====================

fn three_entry_report() -> PayoutReport {
    PayoutReport::new(vec![
        PayoutEntry::new(date("2004-05-19"), "Alice", 100),
        PayoutEntry::new(date("2004-05-19"), "Bob", 200),
        PayoutEntry::new(date("2007-01-11"), "Charles", 400),
    ])
}

#[test]
fn test_sum_and_filtered_sums() {
    let report = three_entry_report();

    assert_eq!(report.sum(), 700);
    assert_eq!(report.filter(|e| e.date == date("2004-05-19")).sum(), 300);
    assert_eq!(report.filter(|e| e.date == date("2007-01-11")).sum(), 400);
}

#[test]
fn test_filter_leaves_original_intact() {
    let report = three_entry_report();
    let before = report.clone();

    let _ = report.filter(|e| e.date == date("2004-05-19"));

    assert_eq!(report, before);
    assert_eq!(report.sum(), 700);
}

#[test]
fn test_empty_report_sums_to_zero() {
    assert_eq!(PayoutReport::new(Vec::new()).sum(), 0);
}

#[test]
fn test_duplicate_entries_are_permitted() {
    let report = parse(
        "date,name,amount\n\
         2025-05-05,Alice,7\n\
         2025-05-05,Alice,7\n",
    )
    .unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(report.sum(), 14);
}

// ==================== AGGREGATION ====================

/// Report source that serves the same text for every index in range.
struct RepeatingSource {
    text: String,
    max_index: u32,
}

impl ReportSource for RepeatingSource {
    fn fetch(&self, index: u32) -> Result<String, FetchError> {
        if index > self.max_index {
            return Err(FetchError::Status {
                index,
                status: reqwest::StatusCode::NOT_FOUND,
            });
        }
        Ok(self.text.clone())
    }
}

#[test]
fn test_total_for_date_sums_across_reports() {
    let source = RepeatingSource {
        text: "date,name,amount\n2025-05-05,Alice,10\n2025-05-06,Bob,1\n".to_string(),
        max_index: 5,
    };

    let total = total_for_date(&source, date("2025-05-05"), 1..=5).unwrap();
    assert_eq!(total, 50);
}

#[test]
fn test_total_for_date_stops_at_first_failing_report() {
    let source = RepeatingSource {
        text: "date,name,amount\n2025-05-05,Alice,10\n".to_string(),
        max_index: 3,
    };

    let err = total_for_date(&source, date("2025-05-05"), 1..=10).unwrap_err();
    assert!(matches!(
        err,
        ReportError::Fetch(FetchError::Status { index: 4, .. })
    ));
}
