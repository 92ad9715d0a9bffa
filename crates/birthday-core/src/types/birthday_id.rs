//! Record identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, InvalidInputError};

/// Server-assigned record identifier.
///
/// `0` and `-1` are placeholders meaning "not yet created"; records built on
/// the client carry one of them until the server assigns a real id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthdayId(i64);

impl BirthdayId {
    /// The placeholder used for records that have not been created yet.
    pub const UNASSIGNED: BirthdayId = BirthdayId(0);

    /// Wrap a raw id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns true if this is a placeholder rather than a server id.
    pub const fn is_unassigned(self) -> bool {
        self.0 == 0 || self.0 == -1
    }

    /// Returns `self` if the server has assigned it.
    ///
    /// # Errors
    ///
    /// Returns an error for the `0`/`-1` placeholders.
    pub fn assigned(self) -> Result<Self, Error> {
        if self.is_unassigned() {
            return Err(InvalidInputError::UnassignedId { value: self.0 }.into());
        }
        Ok(self)
    }
}

impl fmt::Display for BirthdayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BirthdayId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_unassigned() {
        assert!(BirthdayId::new(0).is_unassigned());
        assert!(BirthdayId::new(-1).is_unassigned());
        assert!(!BirthdayId::new(7).is_unassigned());
        assert!(BirthdayId::default().is_unassigned());
    }

    #[test]
    fn assigned_rejects_sentinel() {
        assert!(BirthdayId::new(-1).assigned().is_err());
        assert_eq!(BirthdayId::new(3).assigned().unwrap().get(), 3);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&BirthdayId::new(12)).unwrap();
        assert_eq!(json, "12");
    }
}
