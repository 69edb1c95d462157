// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::tokenizer::{
    ArgumentMap, ArgumentSpec, PREFIX_EMAIL, PREFIX_MATRIC, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
    Prefix, tokenize,
};
use super::util::{Duplicates, parse_index, parse_index_list};
use crate::command::Command;
use crate::error::ParseError;
use crate::index::Index;
use crate::messages::{ADD_USAGE, ARCHIVE_USAGE, FIND_USAGE, UNARCHIVE_USAGE, VIEW_USAGE};
use crate::store::MemberQuery;
use duesbook_domain::{Email, MatriculationNumber, Member, Name, Phone, Tag};
use std::collections::BTreeSet;

const ADD_SPEC: ArgumentSpec = ArgumentSpec::with_repeatable(
    &[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_MATRIC,
        PREFIX_TAG,
    ],
    &[PREFIX_TAG],
);

const NO_PREFIXES: ArgumentSpec = ArgumentSpec::single(&[]);

pub fn parse_add(args: &str) -> Result<Command, ParseError> {
    let map: ArgumentMap = tokenize(args, &ADD_SPEC)?;
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat { usage: ADD_USAGE });
    }

    let name: Name = Name::new(required(&map, PREFIX_NAME)?)?;
    let phone: Phone = Phone::new(required(&map, PREFIX_PHONE)?)?;
    let email: Email = Email::new(required(&map, PREFIX_EMAIL)?)?;
    let matriculation_number: MatriculationNumber =
        MatriculationNumber::new(required(&map, PREFIX_MATRIC)?)?;
    let tags: BTreeSet<Tag> = map
        .all_values(PREFIX_TAG)
        .into_iter()
        .map(Tag::new)
        .collect::<Result<_, _>>()?;

    Ok(Command::AddMember {
        member: Member::new(name, phone, email, matriculation_number, tags),
    })
}

fn required(map: &ArgumentMap, prefix: Prefix) -> Result<&str, ParseError> {
    map.value(prefix).ok_or(ParseError::MissingPrefix {
        prefix: prefix.as_str(),
        usage: ADD_USAGE,
    })
}

pub fn parse_archive(args: &str) -> Result<Command, ParseError> {
    let targets: Vec<Index> = parse_targets(args, ARCHIVE_USAGE)?;
    Ok(Command::Archive { targets })
}

pub fn parse_unarchive(args: &str) -> Result<Command, ParseError> {
    let targets: Vec<Index> = parse_targets(args, UNARCHIVE_USAGE)?;
    Ok(Command::Unarchive { targets })
}

fn parse_targets(args: &str, usage: &'static str) -> Result<Vec<Index>, ParseError> {
    let map: ArgumentMap = tokenize(args, &NO_PREFIXES)?;
    if map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat { usage });
    }
    parse_index_list(map.preamble(), Duplicates::Collapse)
}

pub fn parse_find(args: &str) -> Result<Command, ParseError> {
    let map: ArgumentMap = tokenize(args, &NO_PREFIXES)?;
    let query: MemberQuery = MemberQuery::new(map.preamble().split_whitespace())
        .ok_or(ParseError::InvalidFormat { usage: FIND_USAGE })?;
    Ok(Command::FindMember { query })
}

pub fn parse_view(args: &str) -> Result<Command, ParseError> {
    let map: ArgumentMap = tokenize(args, &NO_PREFIXES)?;
    if map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat { usage: VIEW_USAGE });
    }
    let target: Index = parse_index(map.preamble())?;
    Ok(Command::ViewMember { target })
}
