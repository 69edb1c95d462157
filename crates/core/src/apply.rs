// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, CommandResult, PaymentEdit, PaymentFilter, PaymentScope};
use crate::error::CommandError;
use crate::index::Index;
use crate::messages::HELP;
use crate::store::{MemberQuery, MemberStore, ViewFilter};
use duesbook_domain::{Amount, Member, Payment};
use std::fmt::Write as _;
use time::Date;
use tracing::debug;

/// The outcome of applying a command: the complete next store and the
/// result to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The store after the command.
    pub new_store: MemberStore,
    /// Feedback and control flags for the caller.
    pub result: CommandResult,
}

/// Applies a command to the store, producing a new store and a result.
///
/// This function is pure: `store` is never modified. Every index and rule is
/// checked before the next store is built, so a rejected command has no
/// partial effect.
///
/// # Arguments
///
/// * `store` - The current store (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(Transition)` containing the new store and the command result
/// * `Err(CommandError)` if the command is not valid for this store
///
/// # Errors
///
/// Returns an error if:
/// - An index is outside the current view or the member's payments
/// - The added member already exists
/// - An archive target is already archived, or an unarchive target is not
///
/// # Panics
///
/// Panics if called with `Command::Undo` or `Command::Redo`. Those act on the
/// history owned by [`crate::Session`], not on a store.
pub fn apply(store: &MemberStore, command: Command) -> Result<Transition, CommandError> {
    match command {
        Command::AddMember { member } => add_member(store, member),
        Command::Archive { targets } => set_archived(store, &targets, true),
        Command::Unarchive { targets } => set_archived(store, &targets, false),
        Command::FindMember { query } => Ok(find_member(store, query)),
        Command::List => {
            let mut new_store: MemberStore = store.clone();
            new_store.set_filter(ViewFilter::Active);
            Ok(Transition {
                new_store,
                result: CommandResult::new("Listed all active members"),
            })
        }
        Command::ListArchived => {
            let mut new_store: MemberStore = store.clone();
            new_store.set_filter(ViewFilter::Archived);
            let feedback: &str = if new_store.current_view().is_empty() {
                "No archived members found. Use 'list' command to show active list."
            } else {
                "Listed all archived members"
            };
            Ok(Transition {
                new_store,
                result: CommandResult::new(feedback),
            })
        }
        Command::ViewMember { target } => {
            let position: usize = resolve_member(store, target)?;
            let profile: String = store.all_members()[position].profile();
            Ok(unchanged(store, CommandResult::new(profile)))
        }
        Command::AddPayment {
            targets,
            amount,
            date,
            remarks,
        } => add_payment(store, &targets, amount, date, remarks),
        Command::EditPayment {
            target,
            payment,
            edit,
        } => edit_payment(store, target, payment, &edit),
        Command::DeletePayment { target, payments } => delete_payments(store, target, &payments),
        Command::FindPayment { target, filter } => find_payment(store, target, &filter),
        Command::ViewPayment { scope } => view_payment(store, scope),
        Command::Help => Ok(unchanged(store, CommandResult::help(HELP))),
        Command::Exit => Ok(unchanged(
            store,
            CommandResult::exit("Exiting duesbook as requested ..."),
        )),
        Command::Undo | Command::Redo => {
            unreachable!("undo and redo are handled by the session history")
        }
    }
}

fn unchanged(store: &MemberStore, result: CommandResult) -> Transition {
    Transition {
        new_store: store.clone(),
        result,
    }
}

/// Maps a view index to the member's position in the store.
fn resolve_member(store: &MemberStore, index: Index) -> Result<usize, CommandError> {
    let positions: Vec<usize> = store.view_positions();
    positions
        .get(index.zero_based())
        .copied()
        .ok_or_else(|| CommandError::InvalidMemberIndex {
            index: index.one_based(),
            view_size: positions.len(),
        })
}

/// Maps a display-order payment index to the payment's insertion position.
fn resolve_payment(member: &Member, index: Index) -> Result<usize, CommandError> {
    member
        .display_positions()
        .get(index.zero_based())
        .copied()
        .ok_or_else(|| CommandError::InvalidPaymentIndex {
            member: member.name().to_string(),
            index: index.one_based(),
            count: member.payments().len(),
        })
}

fn add_member(store: &MemberStore, member: Member) -> Result<Transition, CommandError> {
    if store.contains(&member) {
        return Err(CommandError::DuplicateMember(
            member.matriculation_number().clone(),
        ));
    }

    let feedback: String = format!("New member added: {}", member.summary());
    let mut new_store: MemberStore = store.clone();
    new_store.push(member);

    Ok(Transition {
        new_store,
        result: CommandResult::new(feedback),
    })
}

fn set_archived(
    store: &MemberStore,
    targets: &[Index],
    archived: bool,
) -> Result<Transition, CommandError> {
    let positions: Vec<usize> = targets
        .iter()
        .map(|target| resolve_member(store, *target))
        .collect::<Result<_, _>>()?;

    let members: &[Member] = store.all_members();
    let offenders: Vec<String> = positions
        .iter()
        .map(|&position| &members[position])
        .filter(|member| member.is_archived() == archived)
        .map(|member| member.name().to_string())
        .collect();
    if !offenders.is_empty() {
        return Err(if archived {
            CommandError::AlreadyArchived(offenders)
        } else {
            CommandError::NotArchived(offenders)
        });
    }

    let mut new_store: MemberStore = store.clone();
    let mut names: Vec<String> = Vec::with_capacity(positions.len());
    for &position in &positions {
        let member: &Member = &members[position];
        names.push(member.name().to_string());
        new_store.set(position, member.with_archived(archived));
    }
    new_store.set_filter(ViewFilter::Active);

    debug!(count = names.len(), archived, "Updated archive status");

    let feedback: String = if archived {
        format!("Archived: {}", names.join(", "))
    } else {
        format!("Unarchived: {}\nShowing active list.", names.join(", "))
    };
    Ok(Transition {
        new_store,
        result: CommandResult::new(feedback),
    })
}

fn find_member(store: &MemberStore, query: MemberQuery) -> Transition {
    let mut new_store: MemberStore = store.clone();
    new_store.set_filter(ViewFilter::Search(query));
    let count: usize = new_store.current_view().len();
    Transition {
        new_store,
        result: CommandResult::new(format!("{count} members listed!")),
    }
}

fn add_payment(
    store: &MemberStore,
    targets: &[Index],
    amount: Amount,
    date: Date,
    remarks: Option<String>,
) -> Result<Transition, CommandError> {
    let positions: Vec<usize> = targets
        .iter()
        .map(|target| resolve_member(store, *target))
        .collect::<Result<_, _>>()?;

    // One record shared by every target so they all carry the same recorded_at.
    let payment: Payment = Payment::new(amount, date, remarks);

    let members: &[Member] = store.all_members();
    let mut new_store: MemberStore = store.clone();
    let mut names: Vec<String> = Vec::with_capacity(positions.len());
    for &position in &positions {
        let member: &Member = &members[position];
        names.push(member.name().to_string());
        new_store.set(position, member.with_added_payment(payment.clone()));
    }

    Ok(Transition {
        new_store,
        result: CommandResult::new(format!("Added payment {payment} to {}", names.join(", "))),
    })
}

fn edit_payment(
    store: &MemberStore,
    target: Index,
    payment: Index,
    edit: &PaymentEdit,
) -> Result<Transition, CommandError> {
    let member_position: usize = resolve_member(store, target)?;
    let member: &Member = &store.all_members()[member_position];
    let payment_position: usize = resolve_payment(member, payment)?;

    let before: &Payment = &member.payments()[payment_position];
    let after: Payment = edit.apply_to(before);
    let feedback: String = format!(
        "Edited payment #{payment} for {}: {before} -> {after}",
        member.name()
    );

    let mut new_store: MemberStore = store.clone();
    new_store.set(
        member_position,
        member.with_replaced_payment(payment_position, after),
    );

    Ok(Transition {
        new_store,
        result: CommandResult::new(feedback),
    })
}

fn delete_payments(
    store: &MemberStore,
    target: Index,
    payments: &[Index],
) -> Result<Transition, CommandError> {
    let member_position: usize = resolve_member(store, target)?;
    let member: &Member = &store.all_members()[member_position];
    let positions: Vec<usize> = payments
        .iter()
        .map(|payment| resolve_payment(member, *payment))
        .collect::<Result<_, _>>()?;

    let labels: Vec<String> = payments.iter().map(|p| format!("#{p}")).collect();
    let feedback: String = format!(
        "Deleted payment(s) {} from {}",
        labels.join(", "),
        member.name()
    );

    let mut new_store: MemberStore = store.clone();
    new_store.set(member_position, member.with_removed_payments_at(&positions));

    Ok(Transition {
        new_store,
        result: CommandResult::new(feedback),
    })
}

fn find_payment(
    store: &MemberStore,
    target: Index,
    filter: &PaymentFilter,
) -> Result<Transition, CommandError> {
    let position: usize = resolve_member(store, target)?;
    let member: &Member = &store.all_members()[position];

    let mut matches: Vec<&Payment> = member
        .payments()
        .iter()
        .filter(|payment| filter.matches(payment))
        .collect();
    matches.sort_by(|a, b| a.search_cmp(b));

    debug!(member = %member.name(), count = matches.len(), "Searched payments");

    let feedback: String = if matches.is_empty() {
        format!("No payments found for {} matching {filter}.", member.name())
    } else {
        let lines: Vec<String> = matches.iter().map(|p| format!("- {p}")).collect();
        format!(
            "Found {} payment(s) for {}:\n{}\n\n\
             Note: Payments shown here are not indexed. \
             Do not use these results for 'editpayment' or 'deletepayment'.\n\
             Use the 'viewpayment' command to obtain the correct payment index.",
            matches.len(),
            member.name(),
            lines.join("\n")
        )
    };
    Ok(unchanged(store, CommandResult::new(feedback)))
}

fn view_payment(store: &MemberStore, scope: PaymentScope) -> Result<Transition, CommandError> {
    let feedback: String = match scope {
        PaymentScope::Member(target) => {
            let position: usize = resolve_member(store, target)?;
            payment_statement(&store.all_members()[position])
        }
        PaymentScope::All => payment_summary(store.all_members()),
    };
    Ok(unchanged(store, CommandResult::new(feedback)))
}

fn payment_statement(member: &Member) -> String {
    let payments: Vec<Payment> = member.payments_in_display_order();
    if payments.is_empty() {
        return format!("{} has no payments recorded.", member.name());
    }

    let mut statement: String = format!(
        "Payments for {} ({}). Total: ${}",
        member.name(),
        payments.len(),
        member.total_paid()
    );
    for (rank, payment) in payments.iter().enumerate() {
        let _ = write!(statement, "\n{}. {payment}", rank + 1);
    }
    statement
}

fn payment_summary(members: &[Member]) -> String {
    let grand_total: Amount = members.iter().map(Member::total_paid).sum();
    let mut summary: String = format!(
        "Payments summary for {} members. Grand total: ${grand_total}",
        members.len()
    );
    if members.is_empty() {
        summary.push_str("\n(no payments)");
    }
    for member in members {
        let _ = write!(summary, "\n- {}: ${}", member.name(), member.total_paid());
    }
    summary
}
