// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur while constructing or validating domain values.
///
/// The messages are user facing: the interpreter shows them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Member name is blank or contains characters outside the allowed set.
    #[error(
        "Names should only contain alphabetic characters, spaces, hyphens (-), apostrophes ('), and periods (.), and should not be blank: '{0}'"
    )]
    InvalidName(String),
    /// Phone number is not made of at least three digits.
    #[error("Phone numbers should only contain digits, and be at least 3 digits long: '{0}'")]
    InvalidPhone(String),
    /// Email address is not of the form `local@domain`.
    #[error("Emails should be of the format local-part@domain: '{0}'")]
    InvalidEmail(String),
    /// Matriculation number is blank, too long, or not alphanumeric.
    #[error(
        "Matriculation numbers should be alphanumeric, non-blank and at most {max} characters: '{value}'"
    )]
    InvalidMatriculationNumber {
        /// The rejected input.
        value: String,
        /// The maximum accepted length.
        max: usize,
    },
    /// Tag is blank or not alphanumeric.
    #[error("Tag names should be alphanumeric: '{0}'")]
    InvalidTag(String),
    /// Amount is negative, non-numeric, or has more than two fractional digits.
    #[error("Amount must be a non-negative number with at most 2 decimal places: '{0}'")]
    InvalidAmount(String),
    /// Date is not in one of the accepted formats or is not a calendar date.
    #[error("Invalid date '{0}'. Please use YYYY-MM-DD or YYYY-M-D")]
    InvalidDate(String),
    /// Date lies after today.
    #[error("Date cannot be in the future: {date} (today is {today})")]
    FutureDate {
        /// The rejected date.
        date: time::Date,
        /// The reference date used for the check.
        today: time::Date,
    },
}
