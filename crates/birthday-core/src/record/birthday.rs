//! Birthday record type.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::age::age_on;
use crate::error::{Error, InvalidDateError, InvalidInputError};
use crate::types::{BirthdayId, UserId};

/// Earliest birth year accepted by [`Birthday::validate`].
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// A single birthday entry.
///
/// The birth date components are not checked against the real calendar here;
/// [`Birthday::validate`] only enforces ranges, and the age calculator rejects
/// dates such as April 31.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Birthday {
    /// Server-assigned id; a placeholder until the record is created.
    #[serde(default)]
    pub id: BirthdayId,

    /// Owning user, empty when authentication is not in use.
    #[serde(rename = "userId", default, deserialize_with = "null_as_default")]
    pub owner_id: UserId,

    pub name: String,

    pub birth_year: i32,

    /// 1..=12
    pub birth_month: u32,

    /// 1..=31
    pub birth_day_of_month: u32,

    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub remarks: Option<String>,

    /// URL of a display image.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub picture_url: Option<String>,

    /// Derived from the birth date; recomputed after every fetch.
    #[serde(default)]
    pub age: i32,
}

impl Birthday {
    /// Create a record that has not been sent to the server yet.
    pub fn new(name: impl Into<String>, birth_year: i32, birth_month: u32, birth_day_of_month: u32) -> Self {
        Self {
            id: BirthdayId::UNASSIGNED,
            owner_id: UserId::default(),
            name: name.into(),
            birth_year,
            birth_month,
            birth_day_of_month,
            remarks: None,
            picture_url: None,
            age: 0,
        }
    }

    /// Set the remarks; an empty string clears them.
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = non_empty(remarks.into());
        self
    }

    /// Set the picture URL; an empty string clears it.
    pub fn with_picture_url(mut self, url: impl Into<String>) -> Self {
        self.picture_url = non_empty(url.into());
        self
    }

    /// Set the owning user.
    pub fn with_owner(mut self, owner: UserId) -> Self {
        self.owner_id = owner;
        self
    }

    /// Check the field contract before anything is sent to the server.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: blank name, day outside 1..=31,
    /// month outside 1..=12, or a year before [`MIN_BIRTH_YEAR`].
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(InvalidInputError::BlankName.into());
        }
        if !(1..=31).contains(&self.birth_day_of_month) {
            return Err(InvalidInputError::Day {
                value: self.birth_day_of_month,
            }
            .into());
        }
        if !(1..=12).contains(&self.birth_month) {
            return Err(InvalidInputError::Month {
                value: self.birth_month,
            }
            .into());
        }
        if self.birth_year < MIN_BIRTH_YEAR {
            return Err(InvalidInputError::Year {
                value: self.birth_year,
                min: MIN_BIRTH_YEAR,
            }
            .into());
        }
        Ok(())
    }

    /// Returns the birth date, if the components form a calendar date.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.birth_year, self.birth_month, self.birth_day_of_month)
    }

    /// Returns a copy with `age` computed as of `today`.
    pub fn with_age_on(mut self, today: NaiveDate) -> Result<Self, InvalidDateError> {
        self.age = age_on(
            self.birth_year,
            self.birth_month,
            self.birth_day_of_month,
            today,
        )?;
        Ok(self)
    }

    /// Compare every field except the server-assigned `id` and the derived `age`.
    pub fn same_details(&self, other: &Birthday) -> bool {
        self.owner_id == other.owner_id
            && self.name == other.name
            && self.birth_year == other.birth_year
            && self.birth_month == other.birth_month
            && self.birth_day_of_month == other.birth_day_of_month
            && self.remarks == other.remarks
            && self.picture_url == other.picture_url
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({:04}-{:02}-{:02}, age {})",
            self.id,
            self.name,
            self.birth_year,
            self.birth_month,
            self.birth_day_of_month,
            self.age
        )
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(non_empty))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
