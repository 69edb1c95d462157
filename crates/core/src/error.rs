// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use duesbook_domain::{DomainError, MatriculationNumber};
use thiserror::Error;

/// Malformed input: the command word was understood (or not) but the
/// arguments do not satisfy its grammar.
///
/// Parse errors are raised before any command runs, so they never touch the
/// store or the history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The command word is not known.
    #[error("Unknown command '{0}'. Type 'help' to see the available commands")]
    UnknownCommand(String),
    /// The arguments do not follow the command's usage.
    #[error("Invalid command format!\n{usage}")]
    InvalidFormat {
        /// The usage text of the command.
        usage: &'static str,
    },
    /// A required prefix is absent.
    #[error("Missing required parameter {prefix}\n{usage}")]
    MissingPrefix {
        /// The missing prefix, e.g. `a/`.
        prefix: &'static str,
        /// The usage text of the command.
        usage: &'static str,
    },
    /// A prefix the command does not accept.
    #[error("Unknown parameter: {0}")]
    UnknownPrefix(String),
    /// Single-valued prefixes given more than once.
    #[error("Multiple values specified for the following single-valued field(s): {0}")]
    DuplicatePrefix(String),
    /// An index is not a positive integer.
    #[error("Index is not a non-zero unsigned integer: '{0}'")]
    InvalidIndex(String),
    /// An index list contains an empty entry, e.g. `1,,2`.
    #[error("Empty index in '{0}'. Remove stray commas, e.g. 1,2,3")]
    EmptyIndex(String),
    /// An index list repeats an index where repetition is not allowed.
    #[error("Duplicate index {0} is not allowed")]
    DuplicateIndex(usize),
    /// No payment filter was supplied.
    #[error("Please provide one filter: a/AMOUNT, d/DATE or r/REMARK")]
    MissingFilter,
    /// More than one payment filter was supplied.
    #[error("Please specify only one filter: either a/AMOUNT, d/DATE or r/REMARK")]
    TooManyFilters,
    /// A payment edit that changes nothing.
    #[error("At least one field to edit must be provided: a/AMOUNT, d/DATE or r/REMARKS")]
    NoFieldsEdited,
    /// A value failed domain validation.
    #[error(transparent)]
    InvalidValue(#[from] DomainError),
}

/// Well-formed input that violates a rule of the current state.
///
/// Commands validate everything before changing anything, so a
/// `CommandError` always leaves the store exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A member index beyond the current view.
    #[error("The member index provided is invalid: {index} (the list shows {view_size})")]
    InvalidMemberIndex {
        /// The rejected index (1-based).
        index: usize,
        /// The number of members in the current view.
        view_size: usize,
    },
    /// A member with the same matriculation number already exists.
    #[error(
        "This member already exists. A member is uniquely identified by their matriculation number: {0}"
    )]
    DuplicateMember(MatriculationNumber),
    /// Archive targets that are already archived.
    #[error("One or more selected members are already archived: {}", .0.join(", "))]
    AlreadyArchived(Vec<String>),
    /// Unarchive targets that are not archived.
    #[error("One or more selected members are not archived: {}", .0.join(", "))]
    NotArchived(Vec<String>),
    /// A payment index beyond the member's payments.
    #[error("Invalid payment index {index} for {member}: {count} payment(s) recorded")]
    InvalidPaymentIndex {
        /// The member's name.
        member: String,
        /// The rejected index (1-based, display order).
        index: usize,
        /// The number of payments the member has.
        count: usize,
    },
    /// Undo requested with an empty undo history.
    #[error("Nothing to undo.")]
    NothingToUndo,
    /// Redo requested with an empty redo history.
    #[error("Nothing to redo.")]
    NothingToRedo,
}

/// Errors raised when a storage layer hands over an inconsistent member list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Two members share a matriculation number.
    #[error("Duplicate matriculation number in member list: {0}")]
    DuplicateMatriculation(MatriculationNumber),
}

/// Any recoverable failure of a single interpreted line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The command was rejected by the current state.
    #[error(transparent)]
    Command(#[from] CommandError),
}
