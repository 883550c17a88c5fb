// Calendar arithmetic shared by the recurrence and suggestion engines.
//
// Everything works on NaiveDate: a due date is a calendar day, not an instant.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Add whole months, clamping the day to the end of the target month.
///
/// Jan 31 + 1 month is Feb 28 (or 29), never Mar 3.
pub fn add_months_clamped(date: NaiveDate, months: u32) -> NaiveDate {
    // checked_add_months already clamps; it only fails past NaiveDate::MAX
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// Add whole years; Feb 29 lands on Feb 28 in non-leap years.
pub fn add_years_clamped(date: NaiveDate, years: u32) -> NaiveDate {
    add_months_clamped(date, years.saturating_mul(12))
}

pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

/// Same day if it is a weekday, otherwise the following Monday
pub fn roll_to_business_day(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => add_days(date, 2),
        Weekday::Sun => add_days(date, 1),
        _ => date,
    }
}

/// First weekday strictly after `date`
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    roll_to_business_day(add_days(date, 1))
}

/// Soonest date strictly after `from` falling on `target`
pub fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let current = from.weekday().num_days_from_sunday() as i64;
    let wanted = target.num_days_from_sunday() as i64;
    let mut diff = (wanted - current).rem_euclid(7);
    if diff == 0 {
        diff = 7;
    }
    add_days(from, diff as u64)
}

/// Weekday from a Sunday-based index (0 = Sunday .. 6 = Saturday)
pub fn weekday_from_sunday_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Signed day count from `from` to `to`
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
