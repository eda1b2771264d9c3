//! Calendar window arithmetic
//!
//! Rules state their look-back windows in calendar years or days relative
//! to a reference date ("the prior 3 years", "the 30 days up to the
//! reference date"). Year arithmetic is calendar-aware: subtracting a year
//! from 29 February lands on 28 February. All helpers are total - a window
//! that would run off the calendar clamps to the calendar boundary instead
//! of panicking.

use chrono::{Days, Months, NaiveDate};

/// The date `years` calendar years before `date`
pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}

/// The date `years` calendar years after `date`
pub fn years_after(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_add_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MAX)
}

/// The date `months` calendar months before `date`
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// The date `days` days before `date`
pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}
