// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turns a line of user input into a [`Command`].

mod member;
mod payment;
pub mod tokenizer;
pub mod util;

use crate::command::Command;
use crate::error::ParseError;
use crate::messages::{
    EXIT_USAGE, HELP_USAGE, LIST_ARCHIVED_USAGE, LIST_USAGE, REDO_USAGE, UNDO_USAGE,
};
use time::Date;
use tracing::debug;

/// Where the parser gets "today" from when checking payment dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Today {
    /// The local clock, falling back to UTC.
    #[default]
    System,
    /// A fixed date.
    Fixed(Date),
}

impl Today {
    /// Resolves the reference date.
    #[must_use]
    pub fn date(self) -> Date {
        match self {
            Self::System => duesbook_domain::today(),
            Self::Fixed(date) => date,
        }
    }
}

/// Parses command lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandParser {
    today: Today,
}

impl CommandParser {
    /// Creates a parser that reads "today" from the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with a fixed "today".
    #[must_use]
    pub const fn with_fixed_today(today: Date) -> Self {
        Self {
            today: Today::Fixed(today),
        }
    }

    /// Parses a full input line: the first word is the command word and the
    /// rest are its arguments.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidFormat` for a blank line, or any error
    /// [`CommandParser::parse`] returns.
    pub fn parse_line(&self, line: &str) -> Result<Command, ParseError> {
        let trimmed: &str = line.trim();
        if trimmed.is_empty() {
            return Err(ParseError::InvalidFormat { usage: HELP_USAGE });
        }
        let (word, args) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        self.parse(word, args)
    }

    /// Parses the arguments of `command_word`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnknownCommand` for an unknown command word, or
    /// the error of the command's argument grammar.
    pub fn parse(&self, command_word: &str, args: &str) -> Result<Command, ParseError> {
        debug!(command = command_word, "Parsing command");
        match command_word {
            "add" => member::parse_add(args),
            "archive" => member::parse_archive(args),
            "unarchive" => member::parse_unarchive(args),
            "find" => member::parse_find(args),
            "view" => member::parse_view(args),
            "list" => no_arguments(args, LIST_USAGE, Command::List),
            "listarchived" => no_arguments(args, LIST_ARCHIVED_USAGE, Command::ListArchived),
            "addpayment" => payment::parse_add_payment(args, self.today.date()),
            "editpayment" => payment::parse_edit_payment(args, self.today.date()),
            "deletepayment" => payment::parse_delete_payment(args),
            "findpayment" => payment::parse_find_payment(args, self.today.date()),
            "viewpayment" => payment::parse_view_payment(args),
            "undo" => no_arguments(args, UNDO_USAGE, Command::Undo),
            "redo" => no_arguments(args, REDO_USAGE, Command::Redo),
            "help" => no_arguments(args, HELP_USAGE, Command::Help),
            "exit" => no_arguments(args, EXIT_USAGE, Command::Exit),
            unknown => Err(ParseError::UnknownCommand(unknown.to_string())),
        }
    }
}

fn no_arguments(
    args: &str,
    usage: &'static str,
    command: Command,
) -> Result<Command, ParseError> {
    util::ensure_no_arguments(args, usage)?;
    Ok(command)
}
