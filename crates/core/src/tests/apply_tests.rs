// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    amount, create_test_member, create_test_store, date, index, names, payment,
};
use crate::{
    Command, CommandError, MemberQuery, MemberStore, PaymentEdit, PaymentFilter, PaymentScope,
    Transition, ViewFilter, apply,
};
use duesbook_domain::{Member, Payment};

/// A store where Alice has three payments, recorded in this order:
/// 10.00 on 2025-01-10, 20.00 on 2025-03-01, 5.00 on 2025-01-10 (later).
fn store_with_payments() -> MemberStore {
    let store: MemberStore = create_test_store();
    let alice: Member = store.all_members()[0]
        .with_added_payment(payment("10", date(2025, 1, 10), Some("January dues"), 0))
        .with_added_payment(payment("20", date(2025, 3, 1), Some("March dues"), 10))
        .with_added_payment(payment("5", date(2025, 1, 10), None, 20));
    let mut members: Vec<Member> = store.all_members().to_vec();
    members[0] = alice;
    MemberStore::from_members(members).unwrap()
}

fn apply_ok(store: &MemberStore, command: Command) -> Transition {
    apply(store, command).unwrap()
}

#[test]
fn test_add_member_appends() {
    let store: MemberStore = create_test_store();
    let member: Member = create_test_member("Dan Koh", "A0000004W", &["band"]);

    let transition: Transition = apply_ok(&store, Command::AddMember { member });

    assert_eq!(transition.new_store.all_members().len(), 4);
    assert_eq!(
        transition.new_store.all_members()[3].name().value(),
        "Dan Koh"
    );
    assert!(
        transition
            .result
            .feedback
            .starts_with("New member added: Dan Koh; Phone: 91234567")
    );
    assert_eq!(store.all_members().len(), 3);
}

#[test]
fn test_add_member_rejects_duplicate_matriculation() {
    let store: MemberStore = create_test_store();
    let member: Member = create_test_member("Alice Clone", "a0000001x", &[]);

    let result = apply(&store, Command::AddMember { member });

    assert!(matches!(result, Err(CommandError::DuplicateMember(_))));
}

#[test]
fn test_archive_flips_targets_and_resets_view() {
    let mut store: MemberStore = create_test_store();
    store.set_filter(ViewFilter::All);

    let transition: Transition = apply_ok(
        &store,
        Command::Archive {
            targets: vec![index(3), index(1)],
        },
    );

    assert_eq!(transition.result.feedback, "Archived: Carol Ng, Alice Tan");
    assert_eq!(transition.new_store.filter(), &ViewFilter::Active);
    assert_eq!(names(&transition.new_store), vec!["Bob Lim"]);
}

#[test]
fn test_archive_is_all_or_nothing() {
    let store: MemberStore = apply_ok(
        &create_test_store(),
        Command::Archive {
            targets: vec![index(2)],
        },
    )
    .new_store;
    let mut all: MemberStore = store.clone();
    all.set_filter(ViewFilter::All);

    let result = apply(
        &all,
        Command::Archive {
            targets: vec![index(1), index(2)],
        },
    );

    assert_eq!(
        result,
        Err(CommandError::AlreadyArchived(vec![String::from("Bob Lim")]))
    );
    assert!(!all.all_members()[0].is_archived());
}

#[test]
fn test_archive_rejects_index_outside_view() {
    let result = apply(
        &create_test_store(),
        Command::Archive {
            targets: vec![index(1), index(4)],
        },
    );

    assert_eq!(
        result,
        Err(CommandError::InvalidMemberIndex {
            index: 4,
            view_size: 3
        })
    );
}

#[test]
fn test_unarchive_requires_archived_targets() {
    let archived: MemberStore = apply_ok(
        &create_test_store(),
        Command::Archive {
            targets: vec![index(1)],
        },
    )
    .new_store;
    let archived_view: MemberStore = apply_ok(&archived, Command::ListArchived).new_store;
    assert_eq!(names(&archived_view), vec!["Alice Tan"]);

    let transition: Transition = apply_ok(
        &archived_view,
        Command::Unarchive {
            targets: vec![index(1)],
        },
    );
    assert_eq!(
        transition.result.feedback,
        "Unarchived: Alice Tan\nShowing active list."
    );
    assert_eq!(names(&transition.new_store).len(), 3);

    let result = apply(
        &create_test_store(),
        Command::Unarchive {
            targets: vec![index(2)],
        },
    );
    assert_eq!(
        result,
        Err(CommandError::NotArchived(vec![String::from("Bob Lim")]))
    );
}

#[test]
fn test_list_archived_reports_empty_view() {
    let transition: Transition = apply_ok(&create_test_store(), Command::ListArchived);

    assert_eq!(
        transition.result.feedback,
        "No archived members found. Use 'list' command to show active list."
    );
    assert_eq!(transition.new_store.filter(), &ViewFilter::Archived);
}

#[test]
fn test_find_matches_names_and_tags() {
    let query: MemberQuery = MemberQuery::new(["COMMITTEE", "carol"]).unwrap();

    let transition: Transition = apply_ok(&create_test_store(), Command::FindMember { query });

    assert_eq!(transition.result.feedback, "2 members listed!");
    assert_eq!(names(&transition.new_store), vec!["Bob Lim", "Carol Ng"]);
}

#[test]
fn test_indexes_resolve_against_current_view() {
    let query: MemberQuery = MemberQuery::new(["carol"]).unwrap();
    let filtered: MemberStore = apply_ok(&create_test_store(), Command::FindMember { query }).new_store;

    let transition: Transition = apply_ok(
        &filtered,
        Command::AddPayment {
            targets: vec![index(1)],
            amount: amount("12"),
            date: date(2025, 5, 1),
            remarks: None,
        },
    );

    let carol: &Member = &transition.new_store.all_members()[2];
    assert_eq!(carol.payments().len(), 1);
    assert!(transition.new_store.all_members()[0].payments().is_empty());
}

#[test]
fn test_add_payment_shares_one_record_across_targets() {
    let transition: Transition = apply_ok(
        &create_test_store(),
        Command::AddPayment {
            targets: vec![index(1), index(2)],
            amount: amount("23.5"),
            date: date(2025, 10, 9),
            remarks: Some(String::from("annual dues")),
        },
    );

    let members: &[Member] = transition.new_store.all_members();
    assert_eq!(members[0].payments(), members[1].payments());
    assert!(members[2].payments().is_empty());
    assert_eq!(
        transition.result.feedback,
        "Added payment 2025-10-09 | $23.50 | annual dues to Alice Tan, Bob Lim"
    );
}

#[test]
fn test_add_payment_validates_every_index_first() {
    let store: MemberStore = create_test_store();

    let result = apply(
        &store,
        Command::AddPayment {
            targets: vec![index(1), index(9)],
            amount: amount("5"),
            date: date(2025, 1, 1),
            remarks: None,
        },
    );

    assert!(matches!(
        result,
        Err(CommandError::InvalidMemberIndex { index: 9, .. })
    ));
    assert!(store.all_members()[0].payments().is_empty());
}

#[test]
fn test_edit_payment_uses_display_order() {
    let store: MemberStore = store_with_payments();

    // Display order: March (20.00), then the later 2025-01-10 record (5.00),
    // then January dues (10.00).
    let transition: Transition = apply_ok(
        &store,
        Command::EditPayment {
            target: index(1),
            payment: index(2),
            edit: PaymentEdit::new(Some(amount("7.25")), None, Some(String::from("fixed")))
                .unwrap(),
        },
    );

    let alice: &Member = &transition.new_store.all_members()[0];
    assert_eq!(alice.payments()[2].amount(), amount("7.25"));
    assert_eq!(alice.payments()[2].remarks(), Some("fixed"));
    assert_eq!(alice.payments()[0].amount(), amount("10"));
    assert_eq!(
        transition.result.feedback,
        "Edited payment #2 for Alice Tan: 2025-01-10 | $5.00 -> 2025-01-10 | $7.25 | fixed"
    );
}

#[test]
fn test_edit_payment_can_clear_remarks() {
    let store: MemberStore = store_with_payments();

    let transition: Transition = apply_ok(
        &store,
        Command::EditPayment {
            target: index(1),
            payment: index(1),
            edit: PaymentEdit::new(None, None, Some(String::new())).unwrap(),
        },
    );

    let march: &Payment = &transition.new_store.all_members()[0].payments()[1];
    assert_eq!(march.remarks(), None);
    assert_eq!(march.amount(), amount("20"));
}

#[test]
fn test_edit_payment_rejects_out_of_range_index() {
    let result = apply(
        &store_with_payments(),
        Command::EditPayment {
            target: index(1),
            payment: index(4),
            edit: PaymentEdit::new(Some(amount("1")), None, None).unwrap(),
        },
    );

    assert_eq!(
        result,
        Err(CommandError::InvalidPaymentIndex {
            member: String::from("Alice Tan"),
            index: 4,
            count: 3
        })
    );
}

#[test]
fn test_delete_payments_by_display_index() {
    let transition: Transition = apply_ok(
        &store_with_payments(),
        Command::DeletePayment {
            target: index(1),
            payments: vec![index(1), index(3)],
        },
    );

    let alice: &Member = &transition.new_store.all_members()[0];
    assert_eq!(alice.payments().len(), 1);
    assert_eq!(alice.payments()[0].amount(), amount("5"));
    assert_eq!(
        transition.result.feedback,
        "Deleted payment(s) #1, #3 from Alice Tan"
    );
}

#[test]
fn test_delete_payment_removes_only_the_chosen_equal_record() {
    let store: MemberStore = create_test_store();
    let twin: Payment = payment("10", date(2025, 2, 2), None, 0);
    let bob: Member = store.all_members()[1]
        .with_added_payment(twin.clone())
        .with_added_payment(twin);
    let mut members: Vec<Member> = store.all_members().to_vec();
    members[1] = bob;
    let store: MemberStore = MemberStore::from_members(members).unwrap();

    let transition: Transition = apply_ok(
        &store,
        Command::DeletePayment {
            target: index(2),
            payments: vec![index(2)],
        },
    );

    assert_eq!(transition.new_store.all_members()[1].payments().len(), 1);
}

#[test]
fn test_delete_payment_validates_every_index_first() {
    let store: MemberStore = store_with_payments();

    let result = apply(
        &store,
        Command::DeletePayment {
            target: index(1),
            payments: vec![index(1), index(5)],
        },
    );

    assert!(matches!(
        result,
        Err(CommandError::InvalidPaymentIndex { index: 5, .. })
    ));
}

#[test]
fn test_find_payment_sorts_by_date_then_amount() {
    let transition: Transition = apply_ok(
        &store_with_payments(),
        Command::FindPayment {
            target: index(1),
            filter: PaymentFilter::Date(date(2025, 1, 10)),
        },
    );

    assert!(transition.result.feedback.starts_with(
        "Found 2 payment(s) for Alice Tan:\n- 2025-01-10 | $10.00 | January dues\n- 2025-01-10 | $5.00\n\nNote:"
    ));
    assert_eq!(transition.new_store, store_with_payments());
}

#[test]
fn test_find_payment_remark_is_case_insensitive() {
    let transition: Transition = apply_ok(
        &store_with_payments(),
        Command::FindPayment {
            target: index(1),
            filter: PaymentFilter::Remark(String::from("DUES")),
        },
    );

    assert!(
        transition
            .result
            .feedback
            .starts_with("Found 2 payment(s) for Alice Tan:")
    );
}

#[test]
fn test_find_payment_without_matches() {
    let transition: Transition = apply_ok(
        &store_with_payments(),
        Command::FindPayment {
            target: index(1),
            filter: PaymentFilter::Amount(amount("99")),
        },
    );

    assert_eq!(
        transition.result.feedback,
        "No payments found for Alice Tan matching amount 99.00."
    );
}

#[test]
fn test_view_payment_for_one_member() {
    let transition: Transition = apply_ok(
        &store_with_payments(),
        Command::ViewPayment {
            scope: PaymentScope::Member(index(1)),
        },
    );

    assert_eq!(
        transition.result.feedback,
        "Payments for Alice Tan (3). Total: $35.00\n\
         1. 2025-03-01 | $20.00 | March dues\n\
         2. 2025-01-10 | $5.00\n\
         3. 2025-01-10 | $10.00 | January dues"
    );
}

#[test]
fn test_view_payment_member_without_payments() {
    let transition: Transition = apply_ok(
        &store_with_payments(),
        Command::ViewPayment {
            scope: PaymentScope::Member(index(2)),
        },
    );

    assert_eq!(transition.result.feedback, "Bob Lim has no payments recorded.");
}

#[test]
fn test_view_payment_all_includes_archived_members() {
    let archived: MemberStore = apply_ok(
        &store_with_payments(),
        Command::Archive {
            targets: vec![index(1)],
        },
    )
    .new_store;

    let transition: Transition = apply_ok(
        &archived,
        Command::ViewPayment {
            scope: PaymentScope::All,
        },
    );

    assert_eq!(
        transition.result.feedback,
        "Payments summary for 3 members. Grand total: $35.00\n\
         - Alice Tan: $35.00\n\
         - Bob Lim: $0.00\n\
         - Carol Ng: $0.00"
    );
}

#[test]
fn test_view_member_shows_profile() {
    let transition: Transition =
        apply_ok(&store_with_payments(), Command::ViewMember { target: index(1) });

    assert!(transition.result.feedback.starts_with("Name: Alice Tan\n"));
    assert!(
        transition
            .result
            .feedback
            .contains("Payments: 3 total (latest on 2025-03-01), $35.00 paid")
    );
}

#[test]
fn test_help_and_exit_flags() {
    let store: MemberStore = create_test_store();

    let help: Transition = apply_ok(&store, Command::Help);
    assert!(help.result.show_help);
    assert!(!help.result.exit);

    let exit: Transition = apply_ok(&store, Command::Exit);
    assert!(exit.result.exit);
    assert_eq!(exit.new_store, store);
}
