// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{amount, date, index, test_parser, today};
use crate::{Command, CommandParser, ParseError, PaymentEdit, PaymentFilter, PaymentScope};
use duesbook_domain::DomainError;

fn parse(line: &str) -> Result<Command, ParseError> {
    test_parser().parse_line(line)
}

#[test]
fn test_blank_line_is_invalid_format() {
    assert!(matches!(
        parse("   "),
        Err(ParseError::InvalidFormat { .. })
    ));
}

#[test]
fn test_unknown_command_word() {
    assert_eq!(
        parse("remove 1"),
        Err(ParseError::UnknownCommand(String::from("remove")))
    );
}

#[test]
fn test_command_words_are_case_sensitive() {
    assert_eq!(
        parse("LIST"),
        Err(ParseError::UnknownCommand(String::from("LIST")))
    );
}

#[test]
fn test_no_argument_commands() {
    assert_eq!(parse("list").unwrap(), Command::List);
    assert_eq!(parse("listarchived").unwrap(), Command::ListArchived);
    assert_eq!(parse("undo").unwrap(), Command::Undo);
    assert_eq!(parse("redo").unwrap(), Command::Redo);
    assert_eq!(parse("help").unwrap(), Command::Help);
    assert_eq!(parse(" exit ").unwrap(), Command::Exit);
}

#[test]
fn test_no_argument_commands_reject_trailing_text() {
    for line in ["list 1", "listarchived all", "undo 2", "redo x", "help me", "exit now"] {
        assert!(
            matches!(parse(line), Err(ParseError::InvalidFormat { .. })),
            "{line} should be rejected"
        );
    }
}

#[test]
fn test_add_member() {
    let command: Command =
        parse("add n/Dan Koh p/81234567 e/dan@example.com m/a0000004w t/committee t/band")
            .unwrap();

    let Command::AddMember { member } = command else {
        panic!("expected AddMember");
    };
    assert_eq!(member.name().value(), "Dan Koh");
    assert_eq!(member.phone().value(), "81234567");
    assert_eq!(member.email().value(), "dan@example.com");
    assert_eq!(member.matriculation_number().value(), "A0000004W");
    assert_eq!(member.tags().len(), 2);
    assert!(!member.is_archived());
}

#[test]
fn test_add_member_requires_every_field() {
    let result: Result<Command, ParseError> = parse("add n/Dan Koh p/81234567 e/dan@example.com");

    assert!(matches!(
        result,
        Err(ParseError::MissingPrefix { prefix: "m/", .. })
    ));
}

#[test]
fn test_add_member_rejects_preamble() {
    assert!(matches!(
        parse("add Dan n/Dan p/81234567 e/dan@example.com m/A1"),
        Err(ParseError::InvalidFormat { .. })
    ));
}

#[test]
fn test_add_member_rejects_duplicate_single_valued_prefix() {
    assert_eq!(
        parse("add n/Dan n/Daniel p/81234567 e/dan@example.com m/A1"),
        Err(ParseError::DuplicatePrefix(String::from("n/")))
    );
}

#[test]
fn test_add_member_reports_invalid_field() {
    assert!(matches!(
        parse("add n/R2D2 p/81234567 e/dan@example.com m/A1"),
        Err(ParseError::InvalidValue(DomainError::InvalidName(_)))
    ));
}

#[test]
fn test_archive_collapses_duplicate_indexes() {
    assert_eq!(
        parse("archive 2,1,2").unwrap(),
        Command::Archive {
            targets: vec![index(2), index(1)]
        }
    );
    assert_eq!(
        parse("unarchive 1").unwrap(),
        Command::Unarchive {
            targets: vec![index(1)]
        }
    );
}

#[test]
fn test_archive_requires_indexes() {
    assert!(matches!(
        parse("archive"),
        Err(ParseError::InvalidFormat { .. })
    ));
    assert!(matches!(parse("archive 0"), Err(ParseError::InvalidIndex(_))));
    assert!(matches!(parse("archive 1,,2"), Err(ParseError::EmptyIndex(_))));
}

#[test]
fn test_find_requires_keywords() {
    let Command::FindMember { query } = parse("find Alice  committee").unwrap() else {
        panic!("expected FindMember");
    };
    assert_eq!(query.keywords(), ["alice", "committee"]);

    assert!(matches!(parse("find"), Err(ParseError::InvalidFormat { .. })));
}

#[test]
fn test_view_member() {
    assert_eq!(
        parse("view 3").unwrap(),
        Command::ViewMember { target: index(3) }
    );
    assert!(matches!(parse("view"), Err(ParseError::InvalidFormat { .. })));
    assert!(matches!(parse("view -3"), Err(ParseError::InvalidIndex(_))));
}

#[test]
fn test_add_payment() {
    assert_eq!(
        parse("addpayment 1,3 a/23.5 d/2025-10-9 r/annual dues").unwrap(),
        Command::AddPayment {
            targets: vec![index(1), index(3)],
            amount: amount("23.50"),
            date: date(2025, 10, 9),
            remarks: Some(String::from("annual dues")),
        }
    );
}

#[test]
fn test_add_payment_remarks_are_optional() {
    let Command::AddPayment { remarks, .. } = parse("addpayment 1 a/5 d/2025-01-01").unwrap()
    else {
        panic!("expected AddPayment");
    };
    assert_eq!(remarks, None);
}

#[test]
fn test_add_payment_rejects_duplicate_member_indexes() {
    assert_eq!(
        parse("addpayment 1,2,1 a/5 d/2025-01-01"),
        Err(ParseError::DuplicateIndex(1))
    );
}

#[test]
fn test_add_payment_requires_amount_and_date() {
    assert!(matches!(
        parse("addpayment 1 d/2025-10-09"),
        Err(ParseError::MissingPrefix { prefix: "a/", .. })
    ));
    assert!(matches!(
        parse("addpayment 1 a/23.50"),
        Err(ParseError::MissingPrefix { prefix: "d/", .. })
    ));
    assert!(matches!(
        parse("addpayment a/23.50 d/2025-10-09"),
        Err(ParseError::InvalidFormat { .. })
    ));
}

#[test]
fn test_add_payment_rejects_bad_amounts() {
    for raw in ["-5", "1.234", "abc", "1e3", "+2"] {
        let line: String = format!("addpayment 1 a/{raw} d/2025-01-01");
        assert!(
            matches!(
                parse(&line),
                Err(ParseError::InvalidValue(DomainError::InvalidAmount(_)))
            ),
            "{raw} should be rejected"
        );
    }
}

#[test]
fn test_dates_accept_padded_and_unpadded_forms() {
    for raw in ["2025-01-05", "2025-1-5", "2025-01-5"] {
        let line: String = format!("addpayment 1 a/5 d/{raw}");
        let Command::AddPayment { date: parsed, .. } = parse(&line).unwrap() else {
            panic!("expected AddPayment");
        };
        assert_eq!(parsed, date(2025, 1, 5));
    }
}

#[test]
fn test_dates_reject_future_and_impossible_days() {
    assert!(matches!(
        parse("addpayment 1 a/5 d/2025-10-16"),
        Err(ParseError::InvalidValue(DomainError::FutureDate { .. }))
    ));
    assert!(parse("addpayment 1 a/5 d/2025-10-15").is_ok());
    for raw in ["2025-02-30", "2025/01/01", "25-1-1", "2025-13-01"] {
        let line: String = format!("addpayment 1 a/5 d/{raw}");
        assert!(
            matches!(
                parse(&line),
                Err(ParseError::InvalidValue(DomainError::InvalidDate(_)))
            ),
            "{raw} should be rejected"
        );
    }
}

#[test]
fn test_today_is_injectable() {
    let parser: CommandParser = CommandParser::with_fixed_today(date(2020, 1, 1));

    assert!(parser.parse_line("addpayment 1 a/5 d/2020-01-02").is_err());
    assert!(parser.parse_line("addpayment 1 a/5 d/2020-01-01").is_ok());
    assert!(date(2020, 1, 1) < today());
}

#[test]
fn test_edit_payment() {
    assert_eq!(
        parse("editpayment 2 p/1 a/30 r/corrected").unwrap(),
        Command::EditPayment {
            target: index(2),
            payment: index(1),
            edit: PaymentEdit::new(
                Some(amount("30")),
                None,
                Some(String::from("corrected"))
            )
            .unwrap(),
        }
    );
}

#[test]
fn test_edit_payment_empty_remarks_clears() {
    let Command::EditPayment { edit, .. } = parse("editpayment 1 p/1 r/").unwrap() else {
        panic!("expected EditPayment");
    };
    assert_eq!(edit.remarks(), Some(""));
    assert_eq!(edit.amount(), None);
}

#[test]
fn test_edit_payment_requires_a_field() {
    assert_eq!(parse("editpayment 1 p/1"), Err(ParseError::NoFieldsEdited));
    assert!(matches!(
        parse("editpayment 1 a/5"),
        Err(ParseError::MissingPrefix { prefix: "p/", .. })
    ));
    assert!(matches!(
        parse("editpayment 1 p/0 a/5"),
        Err(ParseError::InvalidIndex(_))
    ));
}

#[test]
fn test_edit_payment_rejects_unknown_prefix() {
    assert_eq!(
        parse("editpayment 1 p/1 n/Bob"),
        Err(ParseError::UnknownPrefix(String::from("n/")))
    );
}

#[test]
fn test_delete_payment() {
    assert_eq!(
        parse("deletepayment 1 p/3, 1").unwrap(),
        Command::DeletePayment {
            target: index(1),
            payments: vec![index(3), index(1)],
        }
    );
}

#[test]
fn test_delete_payment_rejects_bad_payment_lists() {
    assert_eq!(
        parse("deletepayment 1 p/2,2"),
        Err(ParseError::DuplicateIndex(2))
    );
    assert!(matches!(
        parse("deletepayment 1 p/"),
        Err(ParseError::MissingPrefix { prefix: "p/", .. })
    ));
    assert!(matches!(
        parse("deletepayment 1 p/1,"),
        Err(ParseError::EmptyIndex(_))
    ));
    assert!(matches!(
        parse("deletepayment p/1"),
        Err(ParseError::InvalidFormat { .. })
    ));
}

#[test]
fn test_find_payment_takes_exactly_one_filter() {
    assert_eq!(
        parse("findpayment 1 r/Dues").unwrap(),
        Command::FindPayment {
            target: index(1),
            filter: PaymentFilter::Remark(String::from("Dues")),
        }
    );
    assert_eq!(
        parse("findpayment 1 d/2025-1-30").unwrap(),
        Command::FindPayment {
            target: index(1),
            filter: PaymentFilter::Date(date(2025, 1, 30)),
        }
    );
    assert_eq!(parse("findpayment 1"), Err(ParseError::MissingFilter));
    assert_eq!(
        parse("findpayment 1 a/5 r/dues"),
        Err(ParseError::TooManyFilters)
    );
}

#[test]
fn test_view_payment() {
    assert_eq!(
        parse("viewpayment 2").unwrap(),
        Command::ViewPayment {
            scope: PaymentScope::Member(index(2))
        }
    );
    assert_eq!(
        parse("viewpayment all").unwrap(),
        Command::ViewPayment {
            scope: PaymentScope::All
        }
    );
    assert!(matches!(
        parse("viewpayment"),
        Err(ParseError::InvalidFormat { .. })
    ));
    assert!(matches!(
        parse("viewpayment everyone"),
        Err(ParseError::InvalidIndex(_))
    ));
}
