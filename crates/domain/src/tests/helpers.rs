// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Amount, Email, MatriculationNumber, Member, Name, Payment, Phone, Tag};
use std::collections::BTreeSet;
use time::{Date, Month, OffsetDateTime};

pub fn date(year: i32, month: u8, day: u8) -> Date {
    Date::from_calendar_date(year, Month::try_from(month).unwrap(), day).unwrap()
}

/// A fixed recording timestamp, `seconds` after a common base instant.
pub fn recorded(seconds: i64) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_735_689_600 + seconds).unwrap()
}

pub fn payment(amount: &str, on: Date, remarks: Option<&str>, recorded_seconds: i64) -> Payment {
    Payment::with_recorded_at(
        Amount::parse(amount).unwrap(),
        on,
        remarks.map(String::from),
        recorded(recorded_seconds),
    )
}

pub fn create_test_member(name: &str, matriculation: &str, tags: &[&str]) -> Member {
    let tags: BTreeSet<Tag> = tags.iter().map(|t| Tag::new(t).unwrap()).collect();
    Member::new(
        Name::new(name).unwrap(),
        Phone::new("98765432").unwrap(),
        Email::new("member@example.com").unwrap(),
        MatriculationNumber::new(matriculation).unwrap(),
        tags,
    )
}
