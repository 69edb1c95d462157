// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::index::Index;
use crate::store::MemberQuery;
use duesbook_domain::{Amount, Member, Payment};
use time::Date;

/// A command represents user intent as data only.
///
/// Commands are produced by the parser and consumed by [`crate::apply`] or,
/// for `Undo` and `Redo`, by the session that owns the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new member.
    AddMember {
        /// The fully validated member to add.
        member: Member,
    },
    /// Archive one or more members of the current view.
    Archive {
        /// The view indexes, already de-duplicated.
        targets: Vec<Index>,
    },
    /// Unarchive one or more members of the current view.
    Unarchive {
        /// The view indexes, already de-duplicated.
        targets: Vec<Index>,
    },
    /// Filter the view by keyword.
    FindMember {
        /// The keywords to match.
        query: MemberQuery,
    },
    /// Show active members.
    List,
    /// Show archived members.
    ListArchived,
    /// Show one member's profile.
    ViewMember {
        /// The view index of the member.
        target: Index,
    },
    /// Record the same payment for one or more members.
    AddPayment {
        /// The view indexes of the members to credit.
        targets: Vec<Index>,
        /// The amount paid.
        amount: Amount,
        /// The payment date.
        date: Date,
        /// Optional remarks.
        remarks: Option<String>,
    },
    /// Change fields of one payment.
    EditPayment {
        /// The view index of the member.
        target: Index,
        /// The display index of the payment.
        payment: Index,
        /// The fields to change.
        edit: PaymentEdit,
    },
    /// Remove payments from one member.
    DeletePayment {
        /// The view index of the member.
        target: Index,
        /// The display indexes of the payments to remove.
        payments: Vec<Index>,
    },
    /// Search one member's payments.
    FindPayment {
        /// The view index of the member.
        target: Index,
        /// The single criterion to match.
        filter: PaymentFilter,
    },
    /// Summarize payments of one member or of everyone.
    ViewPayment {
        /// Which payments to summarize.
        scope: PaymentScope,
    },
    /// Revert the last change.
    Undo,
    /// Re-apply the last undone change.
    Redo,
    /// Show the help text.
    Help,
    /// Exit the program.
    Exit,
}

impl Command {
    /// Returns true if a successful run of this command changes members.
    ///
    /// Only mutating commands are recorded in the undo history.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::AddMember { .. }
                | Self::Archive { .. }
                | Self::Unarchive { .. }
                | Self::AddPayment { .. }
                | Self::EditPayment { .. }
                | Self::DeletePayment { .. }
        )
    }

    /// The command word, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddMember { .. } => "add",
            Self::Archive { .. } => "archive",
            Self::Unarchive { .. } => "unarchive",
            Self::FindMember { .. } => "find",
            Self::List => "list",
            Self::ListArchived => "listarchived",
            Self::ViewMember { .. } => "view",
            Self::AddPayment { .. } => "addpayment",
            Self::EditPayment { .. } => "editpayment",
            Self::DeletePayment { .. } => "deletepayment",
            Self::FindPayment { .. } => "findpayment",
            Self::ViewPayment { .. } => "viewpayment",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }
}

/// The fields an `editpayment` replaces. At least one is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentEdit {
    amount: Option<Amount>,
    date: Option<Date>,
    remarks: Option<String>,
}

impl PaymentEdit {
    /// Creates an edit, or `None` when nothing would change.
    ///
    /// `Some("")` as remarks clears the existing remarks.
    #[must_use]
    pub fn new(
        amount: Option<Amount>,
        date: Option<Date>,
        remarks: Option<String>,
    ) -> Option<Self> {
        if amount.is_none() && date.is_none() && remarks.is_none() {
            return None;
        }
        Some(Self {
            amount,
            date,
            remarks,
        })
    }

    /// Returns the new amount, if edited.
    #[must_use]
    pub const fn amount(&self) -> Option<Amount> {
        self.amount
    }

    /// Returns the new date, if edited.
    #[must_use]
    pub const fn date(&self) -> Option<Date> {
        self.date
    }

    /// Returns the new remarks, if edited.
    #[must_use]
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    /// Applies the edit to `payment`, keeping its recording time.
    #[must_use]
    pub fn apply_to(&self, payment: &Payment) -> Payment {
        payment.with_edits(self.amount, self.date, self.remarks.clone())
    }
}

/// The single criterion of a `findpayment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentFilter {
    /// Exact amount.
    Amount(Amount),
    /// Case-insensitive substring of the remarks.
    Remark(String),
    /// Exact date.
    Date(Date),
}

impl PaymentFilter {
    /// Returns true if `payment` satisfies the filter.
    #[must_use]
    pub fn matches(&self, payment: &Payment) -> bool {
        match self {
            Self::Amount(amount) => payment.amount() == *amount,
            Self::Date(date) => payment.date() == *date,
            Self::Remark(needle) => payment
                .remarks()
                .is_some_and(|r| r.to_lowercase().contains(&needle.to_lowercase())),
        }
    }
}

impl std::fmt::Display for PaymentFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "amount {amount}"),
            Self::Date(date) => write!(f, "date {date}"),
            Self::Remark(remark) => write!(f, "remark \"{remark}\""),
        }
    }
}

/// Which payments `viewpayment` summarizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentScope {
    /// One member of the current view.
    Member(Index),
    /// Every member in the store, archived or not.
    All,
}

/// The outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Text shown to the user.
    pub feedback: String,
    /// Whether the caller should display the help text.
    pub show_help: bool,
    /// Whether the caller should stop reading input.
    pub exit: bool,
}

impl CommandResult {
    /// A plain result carrying only feedback.
    #[must_use]
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    /// The result of `help`.
    #[must_use]
    pub fn help(feedback: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback)
        }
    }

    /// The result of `exit`.
    #[must_use]
    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }
}
