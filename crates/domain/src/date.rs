// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar date parsing for payment dates.
//!
//! A single, flexible policy is used everywhere a user types a date:
//! `YYYY-MM-DD` or the unpadded `YYYY-M-D`. Dates after the reference
//! "today" are rejected; payments cannot be recorded ahead of time.

use crate::error::DomainError;
use time::{Date, Month, OffsetDateTime};

/// Parses a payment date and rejects dates after `today`.
///
/// # Arguments
///
/// * `input` - The user-supplied date (surrounding whitespace ignored)
/// * `today` - The reference date for the "not in the future" rule
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the text is not a valid calendar
/// date in an accepted format, or `DomainError::FutureDate` if it lies
/// after `today`.
pub fn parse_payment_date(input: &str, today: Date) -> Result<Date, DomainError> {
    let date: Date = parse_flexible_date(input)?;
    if date > today {
        return Err(DomainError::FutureDate { date, today });
    }
    Ok(date)
}

/// Parses `YYYY-MM-DD` or `YYYY-M-D` without applying the future-date rule.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the input is malformed or does not
/// name a real calendar day (e.g. `2025-02-30`).
pub fn parse_flexible_date(input: &str) -> Result<Date, DomainError> {
    let trimmed: &str = input.trim();
    let invalid = || DomainError::InvalidDate(trimmed.to_string());

    let parts: Vec<&str> = trimmed.split('-').collect();
    let [year, month, day] = *parts.as_slice() else {
        return Err(invalid());
    };

    let numeric = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !numeric(year, 4, 4) || !numeric(month, 1, 2) || !numeric(day, 1, 2) {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u8 = month.parse().map_err(|_| invalid())?;
    let day: u8 = day.parse().map_err(|_| invalid())?;

    let month: Month = Month::try_from(month).map_err(|_| invalid())?;
    Date::from_calendar_date(year, month, day).map_err(|_| invalid())
}

/// Returns today's date from the local clock, falling back to UTC when the
/// local offset cannot be determined.
#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
