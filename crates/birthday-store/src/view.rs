//! Sorting and filtering of record lists.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use birthday_core::Birthday;
use birthday_core::error::{Error, InvalidInputError};

/// Field to sort the current list by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Byte-wise, case-sensitive.
    Name,
    BirthYear,
    Age,
}

/// Field to filter the pristine list by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Case-insensitive prefix match.
    Name,
    /// Exact match on the computed age.
    Age,
}

impl SortField {
    fn compare(self, a: &Birthday, b: &Birthday) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::BirthYear => a.birth_year.cmp(&b.birth_year),
            SortField::Age => a.age.cmp(&b.age),
        }
    }
}

/// Stable sort in place. Equal keys keep their relative order in both directions.
pub fn sort_records(records: &mut [Birthday], field: SortField, ascending: bool) {
    if ascending {
        records.sort_by(|a, b| field.compare(a, b));
    } else {
        records.sort_by(|a, b| field.compare(b, a));
    }
}

/// Derive a filtered list from `base`.
///
/// An empty `value` returns all of `base`. An age value that is not an
/// integer matches nothing.
pub fn filter_records(base: &[Birthday], field: FilterField, value: &str) -> Vec<Birthday> {
    if value.is_empty() {
        return base.to_vec();
    }

    match field {
        FilterField::Name => {
            let prefix = value.to_lowercase();
            base.iter()
                .filter(|b| b.name.to_lowercase().starts_with(&prefix))
                .cloned()
                .collect()
        }
        FilterField::Age => match value.parse::<i32>() {
            Ok(age) => base.iter().filter(|b| b.age == age).cloned().collect(),
            Err(_) => Vec::new(),
        },
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortField::Name => "name",
            SortField::BirthYear => "birth-year",
            SortField::Age => "age",
        })
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "birth-year" | "birthyear" | "year" => Ok(SortField::BirthYear),
            "age" => Ok(SortField::Age),
            _ => Err(InvalidInputError::Other {
                message: format!("unknown sort field '{}'", s),
            }
            .into()),
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FilterField::Name => "name",
            FilterField::Age => "age",
        })
    }
}

impl FromStr for FilterField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(FilterField::Name),
            "age" => Ok(FilterField::Age),
            _ => Err(InvalidInputError::Other {
                message: format!("unknown filter field '{}'", s),
            }
            .into()),
        }
    }
}
