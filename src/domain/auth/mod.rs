//! Auth domain module.
//!
//! A flat credential lookup: accounts are seeded alongside the attendance
//! data and a successful match yields the account's role. There are no
//! tokens or permission checks.

mod account;
mod errors;

pub use account::{Role, UserAccount, UserRecord};
pub use errors::AuthError;
