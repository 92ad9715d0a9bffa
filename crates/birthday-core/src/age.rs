//! Age calculation.
//!
//! Ages are whole calendar years between the birth date and "today", using
//! calendar subtraction rather than dividing a day count. A birthday that has
//! not yet come round this year is not counted. Feb 29 birthdays roll over on
//! Mar 1 in non-leap years.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::InvalidDateError;

/// Source of the current date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Returns the age in whole years of someone born on `year-month-day`, as of `today`.
///
/// Birth dates in the future yield a negative age, truncated toward zero.
///
/// # Errors
///
/// Returns [`InvalidDateError`] if the triple is not a calendar date
/// (month 13, April 31, Feb 29 in a non-leap year...). Callers are expected to
/// validate ranges before this point.
///
/// # Example
///
/// ```
/// use birthday_core::age_on;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(age_on(1990, 1, 1, today).unwrap(), 34);
/// assert_eq!(age_on(1990, 12, 31, today).unwrap(), 33);
/// ```
pub fn age_on(year: i32, month: u32, day: u32, today: NaiveDate) -> Result<i32, InvalidDateError> {
    let birth =
        NaiveDate::from_ymd_opt(year, month, day).ok_or(InvalidDateError { year, month, day })?;

    if birth > today {
        return Ok(-whole_years(today, birth));
    }
    Ok(whole_years(birth, today))
}

fn whole_years(from: NaiveDate, to: NaiveDate) -> i32 {
    let years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years - 1
    } else {
        years
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn birthday_already_passed() {
        assert_eq!(age_on(1990, 1, 1, date(2024, 6, 15)).unwrap(), 34);
    }

    #[test]
    fn birthday_not_yet_reached() {
        assert_eq!(age_on(1990, 12, 31, date(2024, 6, 15)).unwrap(), 33);
    }

    #[test]
    fn birthday_is_today() {
        assert_eq!(age_on(2000, 6, 15, date(2024, 6, 15)).unwrap(), 24);
        assert_eq!(age_on(2000, 6, 16, date(2024, 6, 15)).unwrap(), 23);
    }

    #[test]
    fn born_today_is_zero() {
        assert_eq!(age_on(2024, 6, 15, date(2024, 6, 15)).unwrap(), 0);
    }

    #[test]
    fn leap_day_birthday_in_non_leap_year() {
        assert_eq!(age_on(2000, 2, 29, date(2023, 2, 28)).unwrap(), 22);
        assert_eq!(age_on(2000, 2, 29, date(2023, 3, 1)).unwrap(), 23);
        assert_eq!(age_on(2000, 2, 29, date(2024, 2, 29)).unwrap(), 24);
    }

    #[test]
    fn future_birth_date_is_negative() {
        assert_eq!(age_on(2030, 5, 1, date(2024, 6, 15)).unwrap(), -5);
    }

    #[test]
    fn matches_year_difference_rule() {
        let today = date(2024, 6, 15);
        for (y, m, d) in [(1950, 6, 14), (1950, 6, 15), (1950, 6, 16), (1999, 1, 31)] {
            let expected = if (6, 15) < (m, d) { 2024 - y - 1 } else { 2024 - y };
            assert_eq!(age_on(y, m, d, today).unwrap(), expected);
        }
    }

    #[test]
    fn invalid_dates_fail() {
        let today = date(2024, 6, 15);
        assert!(age_on(1990, 13, 1, today).is_err());
        assert!(age_on(1990, 4, 31, today).is_err());
        assert_eq!(
            age_on(2023, 2, 29, today).unwrap_err(),
            InvalidDateError {
                year: 2023,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn fixed_clock_returns_its_date() {
        let clock = FixedClock(date(2024, 6, 15));
        assert_eq!(clock.today(), date(2024, 6, 15));
    }
}
