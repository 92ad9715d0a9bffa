//! birthday-http - REST-backed implementations of the birthday-core traits.
//!
//! [`HttpRemote`] talks to the birthdays REST API; [`IdentityToolkit`] signs
//! users in against an email/password identity service.

mod client;
mod endpoints;
mod identity;
mod remote;

pub use identity::IdentityToolkit;
pub use remote::HttpRemote;
