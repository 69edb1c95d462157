// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;

/// A position in a list shown to the user.
///
/// Users always see 1-based numbers; internally the index is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// Creates an index from a 1-based number. Returns `None` for `0`.
    #[must_use]
    pub const fn from_one_based(one_based: usize) -> Option<Self> {
        match one_based.checked_sub(1) {
            Some(zero_based) => Some(Self { zero_based }),
            None => None,
        }
    }

    /// Returns the 0-based position.
    #[must_use]
    pub const fn zero_based(&self) -> usize {
        self.zero_based
    }

    /// Returns the 1-based number shown to the user.
    #[must_use]
    pub const fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

/// Removes repeated indexes, keeping the first occurrence of each.
#[must_use]
pub fn dedup_indexes(indexes: &[Index]) -> Vec<Index> {
    let mut seen: HashSet<Index> = HashSet::new();
    indexes
        .iter()
        .copied()
        .filter(|index| seen.insert(*index))
        .collect()
}
