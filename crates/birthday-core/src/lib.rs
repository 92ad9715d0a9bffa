//! birthday-core - Core types and traits for the birthdays client.
//!
//! This crate holds the record entity, the validated newtypes used to address
//! the remote API, the age calculator and the traits that network backends
//! implement. It performs no I/O itself.

pub mod age;
pub mod credentials;
pub mod error;
pub mod record;
pub mod tokens;
pub mod traits;
pub mod types;

pub use age::{Clock, FixedClock, SystemClock, age_on};
pub use credentials::Credentials;
pub use error::Error;
pub use record::Birthday;
pub use tokens::IdToken;
pub use traits::{BirthdayRemote, IdentityProvider, User};
pub use types::{ApiUrl, BirthdayId, ResourcePath, UserId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
