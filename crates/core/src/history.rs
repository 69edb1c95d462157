// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::{MemberStore, Snapshot};
use std::collections::VecDeque;
use std::num::NonZeroUsize;
use tracing::debug;

/// Undo and redo stacks of whole-store snapshots.
///
/// A snapshot is taken of the store as it was *before* each successful
/// mutating command. Undoing swaps the current members onto the redo stack
/// and restores the most recent snapshot.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    limit: Option<NonZeroUsize>,
}

impl History {
    /// Creates an unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history that keeps at most `limit` undo snapshots.
    #[must_use]
    pub fn with_limit(limit: NonZeroUsize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Records the state of `store` before a mutation and clears redo.
    pub fn save_snapshot(&mut self, store: &MemberStore) {
        self.undo.push_back(store.snapshot());
        if let Some(limit) = self.limit
            && self.undo.len() > limit.get()
        {
            self.undo.pop_front();
            debug!(limit = limit.get(), "Dropped oldest undo snapshot");
        }
        self.clear_redo();
        debug!(undo_depth = self.undo.len(), "Saved undo snapshot");
    }

    /// Discards every redo snapshot.
    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    /// Returns true if there is something to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns true if there is something to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Returns the number of undo snapshots.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Returns the number of redo snapshots.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Restores the most recent undo snapshot into `store`.
    ///
    /// # Panics
    ///
    /// Panics if there is nothing to undo. Check [`History::can_undo`] first.
    pub fn undo(&mut self, store: &mut MemberStore) {
        let Some(previous) = self.undo.pop_back() else {
            panic!("undo called with an empty undo history");
        };
        self.redo.push(store.snapshot());
        store.restore(previous);
        debug!(
            undo_depth = self.undo.len(),
            redo_depth = self.redo.len(),
            "Restored undo snapshot"
        );
    }

    /// Restores the most recent redo snapshot into `store`.
    ///
    /// # Panics
    ///
    /// Panics if there is nothing to redo. Check [`History::can_redo`] first.
    pub fn redo(&mut self, store: &mut MemberStore) {
        let Some(next) = self.redo.pop() else {
            panic!("redo called with an empty redo history");
        };
        self.undo.push_back(store.snapshot());
        store.restore(next);
        debug!(
            undo_depth = self.undo.len(),
            redo_depth = self.redo.len(),
            "Restored redo snapshot"
        );
    }
}
