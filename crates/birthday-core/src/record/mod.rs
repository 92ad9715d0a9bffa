//! The birthday record entity.
//!
//! [`Birthday`] mirrors the JSON objects exchanged with the REST API. The
//! `age` field is derived on the client and never trusted from the wire.

mod birthday;

pub use birthday::{Birthday, MIN_BIRTH_YEAR};
