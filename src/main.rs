//! Payout Reporter CLI
//!
//! Fetches the numbered payout reports, parses each one strictly, and prints
//! the total amount paid out on the given date.
//!
//! # Usage
//!
//! ```bash
//! payout-reporter 2025-05-05
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` to trace per-report fetch and match counts

use chrono::{Local, NaiveDate};
use payout_reporter::{total_for_date, HttpReportSource, Result, REPORT_RANGE};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(date_arg) = args.get(1) else {
        print_usage(&args[0]);
        return;
    };

    let Ok(date) = date_arg.parse::<NaiveDate>() else {
        eprintln!("Error: invalid date {:?}, expected YYYY-MM-DD", date_arg);
        process::exit(1);
    };

    match run(date) {
        Ok(total) => println!("{}", total),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(date: NaiveDate) -> Result<i64> {
    let source = HttpReportSource::new();
    total_for_date(&source, date, REPORT_RANGE)
}

fn print_usage(program: &str) {
    println!("usage: {} <date>", program);
    println!("example: {} {}", program, Local::now().date_naive());
}
