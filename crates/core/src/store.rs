// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use duesbook_domain::{Member, find_duplicate_matriculation, is_duplicate_member};

/// The set of keywords a `find` filters members by.
///
/// A member matches if any keyword is a case-insensitive substring of the
/// member's name or of one of the member's tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberQuery {
    keywords: Vec<String>,
}

impl MemberQuery {
    /// Creates a query from whitespace-free keywords.
    ///
    /// Returns `None` if no non-empty keyword remains.
    #[must_use]
    pub fn new<I, S>(keywords: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            None
        } else {
            Some(Self { keywords })
        }
    }

    /// Returns the lowercased keywords.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns true if `member` matches any keyword.
    #[must_use]
    pub fn matches(&self, member: &Member) -> bool {
        let name: String = member.name().value().to_lowercase();
        self.keywords.iter().any(|keyword| {
            name.contains(keyword.as_str())
                || member
                    .tags()
                    .iter()
                    .any(|tag| tag.value().to_lowercase().contains(keyword.as_str()))
        })
    }
}

/// Which members the current view shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewFilter {
    /// Members that are not archived.
    #[default]
    Active,
    /// Archived members only.
    Archived,
    /// Every member.
    All,
    /// Members, archived or not, matching a query.
    Search(MemberQuery),
}

impl ViewFilter {
    /// Returns true if the filter shows `member`.
    #[must_use]
    pub fn shows(&self, member: &Member) -> bool {
        match self {
            Self::Active => !member.is_archived(),
            Self::Archived => member.is_archived(),
            Self::All => true,
            Self::Search(query) => query.matches(member),
        }
    }
}

/// A captured copy of the member list, used by the undo history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    members: Vec<Member>,
}

impl Snapshot {
    /// Returns the captured members.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

/// The ordered collection of members plus the filter of the current view.
///
/// Members are kept in insertion order. The store holds at most one member
/// per matriculation number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberStore {
    members: Vec<Member>,
    filter: ViewFilter,
}

impl MemberStore {
    /// Creates an empty store showing active members.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from a persisted member list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateMatriculation` if two members share a
    /// matriculation number.
    pub fn from_members(members: Vec<Member>) -> Result<Self, StoreError> {
        let mut store: Self = Self::new();
        store.replace_all(members)?;
        Ok(store)
    }

    /// Returns every member in insertion order.
    #[must_use]
    pub fn all_members(&self) -> &[Member] {
        &self.members
    }

    /// Replaces every member, keeping the current filter.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateMatriculation` if two members share a
    /// matriculation number. The store is unchanged on error.
    pub fn replace_all(&mut self, members: Vec<Member>) -> Result<(), StoreError> {
        if let Some(duplicate) = find_duplicate_matriculation(&members) {
            return Err(StoreError::DuplicateMatriculation(duplicate.clone()));
        }
        self.members = members;
        Ok(())
    }

    /// Returns the members shown by the current view, in insertion order.
    #[must_use]
    pub fn current_view(&self) -> Vec<&Member> {
        self.members
            .iter()
            .filter(|member| self.filter.shows(member))
            .collect()
    }

    /// Returns the store positions of the members in the current view.
    ///
    /// `view_positions()[i]` is the index into [`MemberStore::all_members`] of
    /// the member at 0-based view index `i`.
    #[must_use]
    pub fn view_positions(&self) -> Vec<usize> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, member)| self.filter.shows(member))
            .map(|(position, _)| position)
            .collect()
    }

    /// Returns the filter of the current view.
    #[must_use]
    pub const fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    /// Changes the filter of the current view.
    pub fn set_filter(&mut self, filter: ViewFilter) {
        self.filter = filter;
    }

    /// Returns true if a member with the same matriculation number exists.
    #[must_use]
    pub fn contains(&self, member: &Member) -> bool {
        is_duplicate_member(member, &self.members)
    }

    /// Appends a new member.
    ///
    /// The caller checks uniqueness first; see [`MemberStore::contains`].
    pub(crate) fn push(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Replaces the member at store `position`.
    pub(crate) fn set(&mut self, position: usize, member: Member) {
        if let Some(slot) = self.members.get_mut(position) {
            *slot = member;
        }
    }

    /// Captures the member list.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            members: self.members.clone(),
        }
    }

    /// Restores a captured member list. The current filter is kept.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.members = snapshot.members;
    }
}
