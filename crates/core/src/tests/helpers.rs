// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CommandParser, Index, MemberStore, Session};
use duesbook_domain::{Amount, Email, MatriculationNumber, Member, Name, Payment, Phone, Tag};
use std::collections::BTreeSet;
use time::{Date, Month, OffsetDateTime};

pub fn date(year: i32, month: u8, day: u8) -> Date {
    Date::from_calendar_date(year, Month::try_from(month).unwrap(), day).unwrap()
}

/// The fixed "today" every parser in these tests uses.
pub fn today() -> Date {
    date(2025, 10, 15)
}

pub fn test_parser() -> CommandParser {
    CommandParser::with_fixed_today(today())
}

pub fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}

pub fn amount(text: &str) -> Amount {
    Amount::parse(text).unwrap()
}

pub fn payment(text: &str, on: Date, remarks: Option<&str>, recorded_seconds: i64) -> Payment {
    Payment::with_recorded_at(
        amount(text),
        on,
        remarks.map(String::from),
        OffsetDateTime::from_unix_timestamp(1_735_689_600 + recorded_seconds).unwrap(),
    )
}

pub fn create_test_member(name: &str, matriculation: &str, tags: &[&str]) -> Member {
    let tags: BTreeSet<Tag> = tags.iter().map(|t| Tag::new(t).unwrap()).collect();
    Member::new(
        Name::new(name).unwrap(),
        Phone::new("91234567").unwrap(),
        Email::new("member@example.com").unwrap(),
        MatriculationNumber::new(matriculation).unwrap(),
        tags,
    )
}

/// Alice, Bob (tagged `committee`) and Carol, all active, no payments.
pub fn create_test_store() -> MemberStore {
    MemberStore::from_members(vec![
        create_test_member("Alice Tan", "A0000001X", &[]),
        create_test_member("Bob Lim", "A0000002Y", &["committee"]),
        create_test_member("Carol Ng", "A0000003Z", &[]),
    ])
    .unwrap()
}

pub fn create_test_session() -> Session {
    Session::new(create_test_store()).with_parser(test_parser())
}

pub fn names(store: &MemberStore) -> Vec<String> {
    store
        .current_view()
        .iter()
        .map(|m| m.name().to_string())
        .collect()
}
