// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::tokenizer::{
    ArgumentMap, ArgumentSpec, PREFIX_AMOUNT, PREFIX_DATE, PREFIX_PAYMENT_INDEX, PREFIX_REMARKS,
    tokenize,
};
use super::util::{Duplicates, parse_amount, parse_date, parse_index, parse_index_list};
use crate::command::{Command, PaymentEdit, PaymentFilter, PaymentScope};
use crate::error::ParseError;
use crate::index::Index;
use crate::messages::{
    ADD_PAYMENT_USAGE, DELETE_PAYMENT_USAGE, EDIT_PAYMENT_USAGE, FIND_PAYMENT_USAGE,
    VIEW_PAYMENT_USAGE,
};
use duesbook_domain::Amount;
use time::Date;

const ADD_PAYMENT_SPEC: ArgumentSpec =
    ArgumentSpec::single(&[PREFIX_AMOUNT, PREFIX_DATE, PREFIX_REMARKS]);
const EDIT_PAYMENT_SPEC: ArgumentSpec = ArgumentSpec::single(&[
    PREFIX_PAYMENT_INDEX,
    PREFIX_AMOUNT,
    PREFIX_DATE,
    PREFIX_REMARKS,
]);
const DELETE_PAYMENT_SPEC: ArgumentSpec = ArgumentSpec::single(&[PREFIX_PAYMENT_INDEX]);
const FIND_PAYMENT_SPEC: ArgumentSpec =
    ArgumentSpec::single(&[PREFIX_AMOUNT, PREFIX_REMARKS, PREFIX_DATE]);
const NO_PREFIXES: ArgumentSpec = ArgumentSpec::single(&[]);

pub fn parse_add_payment(args: &str, today: Date) -> Result<Command, ParseError> {
    let map: ArgumentMap = tokenize(args, &ADD_PAYMENT_SPEC)?;
    if map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: ADD_PAYMENT_USAGE,
        });
    }
    let targets: Vec<Index> = parse_index_list(map.preamble(), Duplicates::Reject)?;

    let amount: Amount = parse_amount(map.value(PREFIX_AMOUNT).ok_or(
        ParseError::MissingPrefix {
            prefix: PREFIX_AMOUNT.as_str(),
            usage: ADD_PAYMENT_USAGE,
        },
    )?)?;
    let date: Date = parse_date(
        map.value(PREFIX_DATE).ok_or(ParseError::MissingPrefix {
            prefix: PREFIX_DATE.as_str(),
            usage: ADD_PAYMENT_USAGE,
        })?,
        today,
    )?;
    let remarks: Option<String> = map
        .value(PREFIX_REMARKS)
        .filter(|r| !r.is_empty())
        .map(str::to_string);

    Ok(Command::AddPayment {
        targets,
        amount,
        date,
        remarks,
    })
}

pub fn parse_edit_payment(args: &str, today: Date) -> Result<Command, ParseError> {
    let map: ArgumentMap = tokenize(args, &EDIT_PAYMENT_SPEC)?;
    let target: Index = member_index(&map, EDIT_PAYMENT_USAGE)?;
    let payment: Index = parse_index(map.value(PREFIX_PAYMENT_INDEX).ok_or(
        ParseError::MissingPrefix {
            prefix: PREFIX_PAYMENT_INDEX.as_str(),
            usage: EDIT_PAYMENT_USAGE,
        },
    )?)?;

    let amount: Option<Amount> = map.value(PREFIX_AMOUNT).map(parse_amount).transpose()?;
    let date: Option<Date> = map
        .value(PREFIX_DATE)
        .map(|raw| parse_date(raw, today))
        .transpose()?;
    // An empty r/ is an edit that clears the remarks.
    let remarks: Option<String> = map.value(PREFIX_REMARKS).map(str::to_string);

    let edit: PaymentEdit =
        PaymentEdit::new(amount, date, remarks).ok_or(ParseError::NoFieldsEdited)?;
    Ok(Command::EditPayment {
        target,
        payment,
        edit,
    })
}

pub fn parse_delete_payment(args: &str) -> Result<Command, ParseError> {
    let map: ArgumentMap = tokenize(args, &DELETE_PAYMENT_SPEC)?;
    let target: Index = member_index(&map, DELETE_PAYMENT_USAGE)?;
    let raw: &str = map
        .value(PREFIX_PAYMENT_INDEX)
        .filter(|raw| !raw.is_empty())
        .ok_or(ParseError::MissingPrefix {
            prefix: PREFIX_PAYMENT_INDEX.as_str(),
            usage: DELETE_PAYMENT_USAGE,
        })?;
    let payments: Vec<Index> = parse_index_list(raw, Duplicates::Reject)?;
    Ok(Command::DeletePayment { target, payments })
}

pub fn parse_find_payment(args: &str, today: Date) -> Result<Command, ParseError> {
    let map: ArgumentMap = tokenize(args, &FIND_PAYMENT_SPEC)?;
    let target: Index = member_index(&map, FIND_PAYMENT_USAGE)?;

    let given: usize = [PREFIX_AMOUNT, PREFIX_REMARKS, PREFIX_DATE]
        .into_iter()
        .filter(|prefix| map.contains(*prefix))
        .count();
    if given > 1 {
        return Err(ParseError::TooManyFilters);
    }

    let filter: PaymentFilter = if let Some(raw) = map.value(PREFIX_AMOUNT) {
        PaymentFilter::Amount(parse_amount(raw)?)
    } else if let Some(raw) = map.value(PREFIX_DATE) {
        PaymentFilter::Date(parse_date(raw, today)?)
    } else {
        match map.value(PREFIX_REMARKS) {
            Some(raw) if !raw.is_empty() => PaymentFilter::Remark(raw.to_string()),
            _ => return Err(ParseError::MissingFilter),
        }
    };
    Ok(Command::FindPayment { target, filter })
}

pub fn parse_view_payment(args: &str) -> Result<Command, ParseError> {
    let map: ArgumentMap = tokenize(args, &NO_PREFIXES)?;
    let scope: PaymentScope = match map.preamble() {
        "" => {
            return Err(ParseError::InvalidFormat {
                usage: VIEW_PAYMENT_USAGE,
            });
        }
        raw if raw.eq_ignore_ascii_case("all") => PaymentScope::All,
        raw => PaymentScope::Member(parse_index(raw)?),
    };
    Ok(Command::ViewPayment { scope })
}

fn member_index(map: &ArgumentMap, usage: &'static str) -> Result<Index, ParseError> {
    if map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat { usage });
    }
    parse_index(map.preamble())
}
