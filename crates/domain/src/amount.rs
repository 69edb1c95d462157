// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A non-negative monetary amount with at most two fractional digits.
///
/// Backed by an exact decimal so totals never accumulate rounding error.
/// Two amounts are equal when their values are equal, regardless of how many
/// fractional digits were written (`23.5 == 23.50`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    /// The largest number of fractional digits an amount may carry.
    pub const MAX_SCALE: usize = 2;

    /// The largest number of digits before the decimal point.
    ///
    /// Keeps every realistic sum far away from the decimal's overflow bound.
    pub const MAX_WHOLE_DIGITS: usize = 12;

    /// The zero amount.
    pub const ZERO: Self = Self {
        value: Decimal::ZERO,
    };

    /// Parses an amount from user text.
    ///
    /// Accepted: one or more digits, optionally followed by `.` and one or two
    /// digits. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` for negative or signed values,
    /// exponents, more than two fractional digits, or non-numeric input.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidAmount(input.to_string());
        let trimmed: &str = input.trim();

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (trimmed, None),
        };

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || whole.len() > Self::MAX_WHOLE_DIGITS {
            return Err(invalid());
        }
        if let Some(fraction) = fraction
            && (!all_digits(fraction) || fraction.len() > Self::MAX_SCALE)
        {
            return Err(invalid());
        }

        let mut value: Decimal = Decimal::from_str(trimmed).map_err(|_| invalid())?;
        value.rescale(2);
        Ok(Self { value })
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Amount {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Amount> for String {
    fn from(value: Amount) -> Self {
        value.to_string()
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.value,
        }
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, amount| acc + amount)
    }
}

impl<'a> std::iter::Sum<&'a Self> for Amount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
