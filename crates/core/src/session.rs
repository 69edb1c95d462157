// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::{Transition, apply};
use crate::command::{Command, CommandResult};
use crate::error::{CommandError, SessionError};
use crate::history::History;
use crate::parser::CommandParser;
use crate::store::MemberStore;
use tracing::{debug, info, warn};

/// What a command changed, as reported to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    /// The member list changed.
    MembersChanged,
    /// The filter of the current view changed.
    ViewChanged,
}

type Listener = Box<dyn FnMut(StoreChange)>;

/// An interactive session: the store, its undo history and the parser.
///
/// Every line goes through [`Session::execute`]. A failed line leaves the
/// store and the history exactly as they were.
pub struct Session {
    store: MemberStore,
    history: History,
    parser: CommandParser,
    listeners: Vec<Listener>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MemberStore::new())
    }
}

impl Session {
    /// Creates a session over `store` with an unbounded history.
    #[must_use]
    pub fn new(store: MemberStore) -> Self {
        Self {
            store,
            history: History::new(),
            parser: CommandParser::new(),
            listeners: Vec::new(),
        }
    }

    /// Replaces the history, e.g. with a bounded one.
    #[must_use]
    pub fn with_history(mut self, history: History) -> Self {
        self.history = history;
        self
    }

    /// Replaces the parser, e.g. with one that uses a fixed "today".
    #[must_use]
    pub fn with_parser(mut self, parser: CommandParser) -> Self {
        self.parser = parser;
        self
    }

    /// Returns the current store.
    #[must_use]
    pub const fn store(&self) -> &MemberStore {
        &self.store
    }

    /// Returns the undo history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Registers a callback fired after each command that changed the
    /// member list or the view.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(StoreChange) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Parses and executes one line of input.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Parse` if the line is malformed, or
    /// `SessionError::Command` if the command is rejected by the current
    /// state. Neither changes the store or the history.
    pub fn execute(&mut self, line: &str) -> Result<CommandResult, SessionError> {
        let command: Command = self
            .parser
            .parse_line(line)
            .inspect_err(|e| warn!(error = %e, "Rejected input"))?;
        self.execute_command(command)
    }

    /// Executes an already parsed command.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Command` if the command is rejected by the
    /// current state.
    pub fn execute_command(&mut self, command: Command) -> Result<CommandResult, SessionError> {
        let name: &'static str = command.name();
        info!(command = name, "Executing command");

        let outcome: Result<(CommandResult, bool, bool), CommandError> = match command {
            Command::Undo => self.undo().map(|result| (result, true, false)),
            Command::Redo => self.redo().map(|result| (result, true, false)),
            other => self.run(other),
        };

        let (result, members_changed, view_changed) =
            outcome.inspect_err(|e| warn!(command = name, error = %e, "Command rejected"))?;

        if members_changed {
            self.notify(StoreChange::MembersChanged);
        }
        if view_changed {
            self.notify(StoreChange::ViewChanged);
        }
        Ok(result)
    }

    fn run(&mut self, command: Command) -> Result<(CommandResult, bool, bool), CommandError> {
        let mutating: bool = command.is_mutating();
        let Transition { new_store, result } = apply(&self.store, command)?;

        let members_changed: bool = new_store.all_members() != self.store.all_members();
        let view_changed: bool = new_store.filter() != self.store.filter();
        if view_changed {
            debug!(filter = ?new_store.filter(), "View filter changed");
        }

        if mutating {
            self.history.save_snapshot(&self.store);
        }
        self.store = new_store;
        Ok((result, members_changed, view_changed))
    }

    fn undo(&mut self) -> Result<CommandResult, CommandError> {
        if !self.history.can_undo() {
            return Err(CommandError::NothingToUndo);
        }
        self.history.undo(&mut self.store);
        debug!(undo_depth = self.history.undo_depth(), "Undo complete");
        Ok(CommandResult::new("Undid the last change."))
    }

    fn redo(&mut self) -> Result<CommandResult, CommandError> {
        if !self.history.can_redo() {
            return Err(CommandError::NothingToRedo);
        }
        self.history.redo(&mut self.store);
        debug!(redo_depth = self.history.redo_depth(), "Redo complete");
        Ok(CommandResult::new("Redid the last undone change."))
    }

    fn notify(&mut self, change: StoreChange) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}
