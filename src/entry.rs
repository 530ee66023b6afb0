//! Payout entry model: one (date, name, amount) record.

use crate::error::ValidationError;
use chrono::NaiveDate;

/// A single payout record from a report.
///
/// Entries are built by the parser from one data row and are immutable
/// afterwards. Construction alone does not validate: callers must pass the
/// entry through [`PayoutEntry::validate`] before trusting it, so that a
/// validation failure can name the exact entry it rejected. The parser never
/// hands out an unvalidated entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutEntry {
    /// Calendar date of the payout. No time-of-day, no timezone.
    pub date: NaiveDate,

    /// Recipient name, taken verbatim from the source. May be empty.
    pub name: String,

    /// Payout amount. Unit unspecified; non-negative once validated.
    pub amount: i64,
}

impl PayoutEntry {
    /// Creates a new entry. Does not validate; see [`PayoutEntry::validate`].
    pub fn new(date: NaiveDate, name: impl Into<String>, amount: i64) -> Self {
        PayoutEntry {
            date,
            name: name.into(),
            amount,
        }
    }

    /// Checks the entry's invariants, returning it unchanged on success.
    ///
    /// The only rule is that `amount` must be non-negative.
    pub fn validate(self) -> Result<Self, ValidationError> {
        if self.amount < 0 {
            return Err(ValidationError::NegativeAmount {
                amount: self.amount,
            });
        }

        Ok(self)
    }
}
