// Next-occurrence calculation for repeating tasks
//
// Called when a repeating task is marked done; the caller creates the
// successor task from the date returned here.

use super::rule::{Frequency, RecurrenceRule};
use crate::calendar::{add_days, add_months_clamped, add_years_clamped};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

// A weekly scan always finds a listed weekday within this many days
const WEEK_SCAN_DAYS: u64 = 7;

/// Date the task should next fall due after `anchor`
pub fn next_occurrence(anchor: NaiveDate, rule: &RecurrenceRule) -> NaiveDate {
    match rule.frequency {
        Frequency::Daily => add_days(anchor, 1),
        Frequency::Weekly if rule.days_of_week.is_empty() => add_days(anchor, 7),
        Frequency::Weekly => next_listed_weekday(anchor, rule),
        Frequency::Monthly => add_months_clamped(anchor, 1),
        Frequency::Yearly => add_years_clamped(anchor, 1),
    }
}

/// Like `next_occurrence`, keeping the anchor's time of day
pub fn next_occurrence_at(anchor: DateTime<Utc>, rule: &RecurrenceRule) -> DateTime<Utc> {
    let date = next_occurrence(anchor.date_naive(), rule);
    Utc.from_utc_datetime(&date.and_time(anchor.time()))
}

/// Successive occurrences after `anchor`, each computed from the previous.
///
/// Month-end clamping carries forward: Jan 31 monthly gives Feb 28, Mar 28, ...
pub fn occurrences(anchor: NaiveDate, rule: &RecurrenceRule) -> Occurrences {
    Occurrences {
        current: anchor,
        rule: rule.clone(),
    }
}

/// Endless iterator returned by [`occurrences`]
#[derive(Debug, Clone)]
pub struct Occurrences {
    current: NaiveDate,
    rule: RecurrenceRule,
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let next = next_occurrence(self.current, &self.rule);
        if next == self.current {
            // Ran off the end of the calendar
            return None;
        }
        self.current = next;
        Some(next)
    }
}

fn next_listed_weekday(anchor: NaiveDate, rule: &RecurrenceRule) -> NaiveDate {
    (1..=WEEK_SCAN_DAYS)
        .map(|offset| add_days(anchor, offset))
        .find(|date| {
            let index = date.weekday().num_days_from_sunday() as u8;
            rule.days_of_week.contains(&index)
        })
        // Only reachable with out-of-range indexes; behave like a plain weekly rule
        .unwrap_or_else(|| add_days(anchor, 7))
}
