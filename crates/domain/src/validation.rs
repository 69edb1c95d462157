// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::member::Member;
use crate::types::MatriculationNumber;
use std::collections::HashSet;

/// Returns true if `candidate` shares its identity with any of `existing`.
///
/// # Arguments
///
/// * `candidate` - The member about to be added
/// * `existing` - The members already held
#[must_use]
pub fn is_duplicate_member(candidate: &Member, existing: &[Member]) -> bool {
    existing.iter().any(|member| member.is_same_member(candidate))
}

/// Finds the first matriculation number that appears more than once.
///
/// Used to reject whole member lists handed over by a storage layer.
#[must_use]
pub fn find_duplicate_matriculation(members: &[Member]) -> Option<&MatriculationNumber> {
    let mut seen: HashSet<&MatriculationNumber> = HashSet::new();
    members
        .iter()
        .map(Member::matriculation_number)
        .find(|matriculation| !seen.insert(matriculation))
}
