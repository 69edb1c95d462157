// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::amount::Amount;
use crate::payment::{Payment, payments_in_display_order};
use crate::types::{Email, MatriculationNumber, Name, Phone, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Write as _;

/// A club member and the payments they have made.
///
/// Members are immutable values. Every change produces a new `Member`; the
/// caller replaces the old value in the store.
///
/// Payments are kept in insertion order. Display order is always derived on
/// demand via [`Member::payments_in_display_order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    name: Name,
    phone: Phone,
    email: Email,
    matriculation_number: MatriculationNumber,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    payments: Vec<Payment>,
}

impl Member {
    /// Creates an active member with no payments.
    ///
    /// # Arguments
    ///
    /// * `name` - The member's name
    /// * `phone` - The member's phone number
    /// * `email` - The member's email address
    /// * `matriculation_number` - The member's identity
    /// * `tags` - Labels attached to the member
    #[must_use]
    pub const fn new(
        name: Name,
        phone: Phone,
        email: Email,
        matriculation_number: MatriculationNumber,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            matriculation_number,
            tags,
            archived: false,
            payments: Vec::new(),
        }
    }

    /// Returns the member's name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the member's phone number.
    #[must_use]
    pub const fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Returns the member's email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the member's matriculation number.
    #[must_use]
    pub const fn matriculation_number(&self) -> &MatriculationNumber {
        &self.matriculation_number
    }

    /// Returns the member's tags.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns whether the member is archived.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        self.archived
    }

    /// Returns the payments in insertion order.
    #[must_use]
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Returns true if both values describe the same member.
    ///
    /// Identity is the matriculation number alone; two members with the same
    /// name are different people.
    #[must_use]
    pub fn is_same_member(&self, other: &Self) -> bool {
        self.matriculation_number == other.matriculation_number
    }

    /// Returns a copy with the archived flag set to `archived`.
    #[must_use]
    pub fn with_archived(&self, archived: bool) -> Self {
        Self {
            archived,
            ..self.clone()
        }
    }

    /// Returns a copy with `payment` appended.
    #[must_use]
    pub fn with_added_payment(&self, payment: Payment) -> Self {
        let mut next: Self = self.clone();
        next.payments.push(payment);
        next
    }

    /// Returns a copy without the first payment equal to `payment`.
    ///
    /// Only one occurrence is removed even if several are value-equal.
    #[must_use]
    pub fn with_removed_payment(&self, payment: &Payment) -> Self {
        let mut next: Self = self.clone();
        if let Some(position) = next.payments.iter().position(|p| p == payment) {
            next.payments.remove(position);
        }
        next
    }

    /// Returns a copy without the payments at the given insertion positions.
    ///
    /// Out-of-range positions are ignored.
    #[must_use]
    pub fn with_removed_payments_at(&self, positions: &[usize]) -> Self {
        let payments: Vec<Payment> = self
            .payments
            .iter()
            .enumerate()
            .filter(|(position, _)| !positions.contains(position))
            .map(|(_, payment)| payment.clone())
            .collect();
        Self {
            payments,
            ..self.clone()
        }
    }

    /// Returns a copy with the payment at insertion `position` replaced.
    ///
    /// An out-of-range position leaves the payments unchanged.
    #[must_use]
    pub fn with_replaced_payment(&self, position: usize, payment: Payment) -> Self {
        let mut next: Self = self.clone();
        if let Some(slot) = next.payments.get_mut(position) {
            *slot = payment;
        }
        next
    }

    /// Returns the payments sorted in display order.
    #[must_use]
    pub fn payments_in_display_order(&self) -> Vec<Payment> {
        payments_in_display_order(&self.payments)
    }

    /// Maps display rank to insertion position.
    ///
    /// `display_positions()[i]` is the index into [`Member::payments`] of the
    /// payment shown at 0-based display rank `i`.
    #[must_use]
    pub fn display_positions(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..self.payments.len()).collect();
        positions.sort_by(|&a, &b| self.payments[a].display_cmp(&self.payments[b]));
        positions
    }

    /// Returns the sum of all payments.
    #[must_use]
    pub fn total_paid(&self) -> Amount {
        self.payments.iter().map(Payment::amount).sum()
    }

    /// Returns the payment shown first in display order.
    #[must_use]
    pub fn latest_payment(&self) -> Option<&Payment> {
        self.payments.iter().min_by(|a, b| a.display_cmp(b))
    }

    /// One-line summary used in command feedback.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary: String = format!(
            "{}; Phone: {}; Email: {}; Matriculation No.: {}; Tags: ",
            self.name, self.phone, self.email, self.matriculation_number
        );
        for tag in &self.tags {
            let _ = write!(summary, "[{tag}]");
        }
        summary
    }

    /// Multi-line profile shown by the `view` command.
    #[must_use]
    pub fn profile(&self) -> String {
        let tags: String = if self.tags.is_empty() {
            String::from("(none)")
        } else {
            self.tags
                .iter()
                .map(Tag::value)
                .collect::<Vec<&str>>()
                .join(", ")
        };
        let status: &str = if self.archived { "Archived" } else { "Active" };

        let mut profile: String = format!(
            "Name: {}\nPhone: {}\nEmail: {}\nMatriculation No.: {}\nTags: {tags}\nStatus: {status}\nPayments: {} total",
            self.name,
            self.phone,
            self.email,
            self.matriculation_number,
            self.payments.len()
        );
        if let Some(latest) = self.latest_payment() {
            let _ = write!(profile, " (latest on {})", latest.date());
        }
        let _ = write!(profile, ", ${} paid", self.total_paid());
        profile.push_str("\nTo view the full list of payments, use the \"viewpayment\" command.");
        profile
    }
}
