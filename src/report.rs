//! Payout report aggregate and its query operations.
//!
//! A report is an ordered, immutable sequence of validated entries. Queries
//! are pure: `filter` produces a new independent report, `sum` reduces it.

use crate::entry::PayoutEntry;

/// An ordered collection of payout entries parsed from one raw text source.
///
/// Entry order matches the order of the source rows. Duplicate (date, name)
/// pairs are permitted. Every entry is validated on the construction path
/// through the parser; there are no mutation methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayoutReport {
    entries: Vec<PayoutEntry>,
}

impl PayoutReport {
    /// Creates a report from already-validated entries, preserving order.
    pub fn new(entries: Vec<PayoutEntry>) -> Self {
        PayoutReport { entries }
    }

    /// The entries in source order.
    pub fn entries(&self) -> &[PayoutEntry] {
        &self.entries
    }

    /// Number of entries in the report.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the report has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a new report containing only the entries satisfying `predicate`,
    /// in their original relative order. The original report is untouched.
    pub fn filter<F>(&self, predicate: F) -> PayoutReport
    where
        F: Fn(&PayoutEntry) -> bool,
    {
        PayoutReport {
            entries: self
                .entries
                .iter()
                .filter(|entry| predicate(entry))
                .cloned()
                .collect(),
        }
    }

    /// Total payout amount across all entries. Zero for an empty report.
    pub fn sum(&self) -> i64 {
        self.entries.iter().map(|entry| entry.amount).sum()
    }
}
