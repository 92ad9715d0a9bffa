//! Core traits for remote record access and identity.

mod identity;
mod remote;

pub use identity::{IdentityProvider, User};
pub use remote::BirthdayRemote;
