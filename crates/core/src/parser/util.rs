// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ParseError;
use crate::index::{Index, dedup_indexes};
use duesbook_domain::{Amount, parse_payment_date};
use std::collections::HashSet;
use time::Date;

/// How an index list treats repeated entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duplicates {
    /// Keep the first occurrence of each index.
    Collapse,
    /// Reject the list.
    Reject,
}

/// Parses a 1-based index. Signs, zero and non-integers are rejected.
///
/// # Errors
///
/// Returns `ParseError::InvalidIndex` if `raw` is not a positive integer.
pub fn parse_index(raw: &str) -> Result<Index, ParseError> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex(trimmed.to_string()));
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| ParseError::InvalidIndex(trimmed.to_string()))
}

/// Parses a comma separated list of 1-based indexes.
///
/// # Errors
///
/// Returns `ParseError::EmptyIndex` if any entry is blank,
/// `ParseError::InvalidIndex` if any entry is not a positive integer, or
/// `ParseError::DuplicateIndex` if an entry repeats under
/// [`Duplicates::Reject`].
pub fn parse_index_list(raw: &str, duplicates: Duplicates) -> Result<Vec<Index>, ParseError> {
    let mut indexes: Vec<Index> = Vec::new();
    for token in raw.split(',') {
        if token.trim().is_empty() {
            return Err(ParseError::EmptyIndex(raw.trim().to_string()));
        }
        indexes.push(parse_index(token)?);
    }

    match duplicates {
        Duplicates::Collapse => Ok(dedup_indexes(&indexes)),
        Duplicates::Reject => {
            let mut seen: HashSet<Index> = HashSet::new();
            if let Some(repeated) = indexes.iter().find(|index| !seen.insert(**index)) {
                return Err(ParseError::DuplicateIndex(repeated.one_based()));
            }
            Ok(indexes)
        }
    }
}

/// Parses an amount argument.
///
/// # Errors
///
/// Returns `ParseError::InvalidValue` wrapping the domain error.
pub fn parse_amount(raw: &str) -> Result<Amount, ParseError> {
    Ok(Amount::parse(raw)?)
}

/// Parses a payment date argument against `today`.
///
/// # Errors
///
/// Returns `ParseError::InvalidValue` for malformed or future dates.
pub fn parse_date(raw: &str, today: Date) -> Result<Date, ParseError> {
    Ok(parse_payment_date(raw, today)?)
}

/// Rejects trailing text for commands that take no arguments.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` with `usage` if `args` is not blank.
pub fn ensure_no_arguments(args: &str, usage: &'static str) -> Result<(), ParseError> {
    if args.trim().is_empty() {
        Ok(())
    } else {
        Err(ParseError::InvalidFormat { usage })
    }
}
