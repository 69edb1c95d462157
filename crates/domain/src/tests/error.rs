// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::date;
use crate::{Amount, DomainError};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidTag(String::from("a b"));
    assert_eq!(format!("{err}"), "Tag names should be alphanumeric: 'a b'");

    let err: DomainError = Amount::parse("-3").unwrap_err();
    assert_eq!(
        format!("{err}"),
        "Amount must be a non-negative number with at most 2 decimal places: '-3'"
    );

    let err: DomainError = DomainError::FutureDate {
        date: date(2025, 2, 1),
        today: date(2025, 1, 1),
    };
    assert_eq!(
        format!("{err}"),
        "Date cannot be in the future: 2025-02-01 (today is 2025-01-01)"
    );
}
