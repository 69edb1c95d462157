// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::amount::Amount;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use time::{Date, OffsetDateTime};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// An immutable record of a single payment made by a member.
///
/// `recorded_at` is taken from the wall clock when the record is created and
/// is never user supplied. It only exists to order payments that share a date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payment {
    amount: Amount,
    #[serde(with = "iso_date")]
    date: Date,
    #[serde(default)]
    remarks: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    recorded_at: OffsetDateTime,
}

impl Payment {
    /// Creates a payment recorded now.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount paid
    /// * `date` - The calendar date of the payment
    /// * `remarks` - Optional free text; blank remarks are dropped
    #[must_use]
    pub fn new(amount: Amount, date: Date, remarks: Option<String>) -> Self {
        Self::with_recorded_at(amount, date, remarks, OffsetDateTime::now_utc())
    }

    /// Creates a payment with an explicit recording timestamp.
    ///
    /// Used when restoring stored records and in tests that need a fixed
    /// tie-break order.
    #[must_use]
    pub fn with_recorded_at(
        amount: Amount,
        date: Date,
        remarks: Option<String>,
        recorded_at: OffsetDateTime,
    ) -> Self {
        Self {
            amount,
            date,
            remarks: tidy(remarks),
            recorded_at,
        }
    }

    /// Returns a copy with the given fields replaced.
    ///
    /// `recorded_at` is kept so an edited payment keeps its place among
    /// payments that share its date.
    #[must_use]
    pub fn with_edits(
        &self,
        amount: Option<Amount>,
        date: Option<Date>,
        remarks: Option<String>,
    ) -> Self {
        Self {
            amount: amount.unwrap_or(self.amount),
            date: date.unwrap_or(self.date),
            remarks: match remarks {
                Some(remarks) => tidy(Some(remarks)),
                None => self.remarks.clone(),
            },
            recorded_at: self.recorded_at,
        }
    }

    /// Returns the amount paid.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the payment date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the remarks, if any.
    #[must_use]
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    /// Returns when this record was created.
    #[must_use]
    pub const fn recorded_at(&self) -> OffsetDateTime {
        self.recorded_at
    }

    /// The display order: most recent date first, then most recently recorded.
    ///
    /// Exact timestamp ties fall through to amount (descending) and remarks
    /// (ascending) so the ordering is total over distinct values.
    #[must_use]
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        other
            .date
            .cmp(&self.date)
            .then_with(|| other.recorded_at.cmp(&self.recorded_at))
            .then_with(|| other.amount.cmp(&self.amount))
            .then_with(|| self.remarks.cmp(&other.remarks))
    }

    /// The order used for search results: date descending, amount descending,
    /// then remarks ascending (case-insensitive, missing remarks first).
    #[must_use]
    pub fn search_cmp(&self, other: &Self) -> Ordering {
        other
            .date
            .cmp(&self.date)
            .then_with(|| other.amount.cmp(&self.amount))
            .then_with(|| self.remark_key().cmp(&other.remark_key()))
    }

    fn remark_key(&self) -> String {
        self.remarks().unwrap_or_default().to_lowercase()
    }
}

impl std::fmt::Display for Payment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | ${}", self.date, self.amount)?;
        if let Some(remarks) = &self.remarks {
            write!(f, " | {remarks}")?;
        }
        Ok(())
    }
}

/// Returns the payments sorted in display order without touching the input.
#[must_use]
pub fn payments_in_display_order(payments: &[Payment]) -> Vec<Payment> {
    let mut sorted: Vec<Payment> = payments.to_vec();
    sorted.sort_by(Payment::display_cmp);
    sorted
}

fn tidy(remarks: Option<String>) -> Option<String> {
    remarks
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
}
