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

mod apply;
mod command;
mod error;
mod history;
mod index;
mod messages;
mod parser;
mod session;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{Transition, apply};
pub use command::{Command, CommandResult, PaymentEdit, PaymentFilter, PaymentScope};
pub use error::{CommandError, ParseError, SessionError, StoreError};
pub use history::History;
pub use index::Index;
pub use messages::HELP;
pub use parser::{CommandParser, Today};
pub use session::{Session, StoreChange};
pub use store::{MemberQuery, MemberStore, Snapshot, ViewFilter};
