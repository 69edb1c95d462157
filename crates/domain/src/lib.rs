// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod amount;
mod date;
mod error;
mod member;
mod payment;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use amount::Amount;
pub use date::{parse_flexible_date, parse_payment_date, today};
pub use error::DomainError;
pub use member::Member;
pub use payment::{Payment, payments_in_display_order};
pub use types::{Email, MatriculationNumber, Name, Phone, Tag};
pub use validation::{find_duplicate_matriculation, is_duplicate_member};
