//! Age / date-delta calculator
//!
//! Calendar-aware elapsed-time breakdown between a birth date and a
//! reference date, plus the interval to the next birthday.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{ToolboxError, ToolboxResult};

/// Average Gregorian month length in days, used only for the
/// next-birthday months/days breakdown.
const AVG_MONTH_DAYS: f64 = 30.44;

/// Elapsed whole years, months, and days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Interval until the next occurrence of the birth month/day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextBirthday {
    /// Exact number of days until the birthday
    pub total_days: u32,
    /// Approximate months component (see [`next_birthday`])
    pub months: u32,
    /// Approximate days component (see [`next_birthday`])
    pub days: u32,
}

/// Compute elapsed whole years, months, and days from `birth` to `today`.
///
/// This is calendar subtraction, not a divide-by-365: a negative day
/// difference borrows the day count of the month before `today`, and a
/// negative month difference borrows twelve months from the year count.
///
/// # Errors
///
/// Returns [`ToolboxError::InvalidInput`] if `birth` is after `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> ToolboxResult<AgeBreakdown> {
    if birth > today {
        return Err(ToolboxError::InvalidInput(
            "birth date must not be in the future".into(),
        ));
    }

    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;
        // Borrow the day count of the month before `today`
        let (prior_year, prior_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };
        days += days_in_month(prior_year, prior_month);
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(AgeBreakdown {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    })
}

/// Compute the interval from `today` to the next occurrence of the birth
/// month/day, rolling into next year if the date has already passed.
///
/// `total_days` is calendar-exact. The `months`/`days` breakdown, however,
/// is an approximation based on an average month of 30.44 days, carried
/// over from the original tool - it is NOT exact calendar arithmetic and
/// can disagree with it by a day or two near month boundaries.
///
/// A February 29 birthday in a non-leap year is observed on March 1.
pub fn next_birthday(birth: NaiveDate, today: NaiveDate) -> NextBirthday {
    let mut candidate = birthday_in_year(today.year(), birth);
    if candidate < today {
        candidate = birthday_in_year(today.year() + 1, birth);
    }

    let total_days = (candidate - today).num_days().max(0) as u32;
    let months = (total_days as f64 / AVG_MONTH_DAYS).floor() as u32;
    let days = (total_days as f64 % AVG_MONTH_DAYS).floor() as u32;

    NextBirthday {
        total_days,
        months,
        days,
    }
}

/// The birthday as observed in `year`; Feb 29 falls back to Mar 1
fn birthday_in_year(year: i32, birth: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 always exists"))
}

/// Number of days in a calendar month
fn days_in_month(year: i32, month: u32) -> i32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month");
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid first");
    (next_first - first).num_days() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exact_birthday() {
        let age = age_on(date(2000, 3, 15), date(2024, 3, 15)).unwrap();
        assert_eq!(
            age,
            AgeBreakdown {
                years: 24,
                months: 0,
                days: 0
            }
        );
    }

    #[test]
    fn test_borrow_days_from_prior_month() {
        // Five days before the 24th birthday; Feb 2024 has 29 days
        let age = age_on(date(2000, 3, 20), date(2024, 3, 15)).unwrap();
        assert_eq!(
            age,
            AgeBreakdown {
                years: 23,
                months: 11,
                days: 24
            }
        );
    }

    #[test]
    fn test_borrow_across_january() {
        // Day borrow in January reaches into December of the prior year
        let age = age_on(date(2000, 1, 20), date(2024, 1, 15)).unwrap();
        assert_eq!(age.years, 23);
        assert_eq!(age.months, 11);
        assert_eq!(age.days, 26); // 31 (Dec) - 5
    }

    #[test]
    fn test_month_borrow_only() {
        let age = age_on(date(2000, 10, 5), date(2024, 3, 5)).unwrap();
        assert_eq!(
            age,
            AgeBreakdown {
                years: 23,
                months: 5,
                days: 0
            }
        );
    }

    #[test]
    fn test_future_birth_rejected() {
        assert!(age_on(date(2030, 1, 1), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_next_birthday_later_this_year() {
        let nb = next_birthday(date(2000, 6, 1), date(2024, 3, 1));
        // Mar 1 -> Jun 1 2024 = 31 + 30 + 31 = 92 days
        assert_eq!(nb.total_days, 92);
        assert_eq!(nb.months, 3); // floor(92 / 30.44)
        assert_eq!(nb.days, 0); // floor(92 % 30.44) = floor(0.68)
    }

    #[test]
    fn test_next_birthday_rolls_to_next_year() {
        let nb = next_birthday(date(2000, 3, 15), date(2024, 3, 16));
        // Mar 16 2024 -> Mar 15 2025 = 364 days
        assert_eq!(nb.total_days, 364);
    }

    #[test]
    fn test_next_birthday_today_is_zero() {
        let nb = next_birthday(date(2000, 3, 15), date(2024, 3, 15));
        assert_eq!(nb.total_days, 0);
        assert_eq!(nb.months, 0);
        assert_eq!(nb.days, 0);
    }

    #[test]
    fn test_leap_birthday_observed_march_first() {
        // 2025 is not a leap year, so Feb 29 is observed on Mar 1
        let nb = next_birthday(date(2000, 2, 29), date(2025, 1, 1));
        // Jan 1 -> Mar 1 2025 = 31 + 28 = 59 days
        assert_eq!(nb.total_days, 59);
    }
}
