// Date and time phrase resolution for quick capture.
//
// "tomorrow", "next friday", "at 5pm", "at 17:30". Relative words always
// resolve against the caller's reference date so output is reproducible.

use crate::calendar::{add_days, next_weekday};
use chrono::{NaiveDate, NaiveTime, Weekday};
use regex::{Captures, Regex};

pub(crate) const DATE_PATTERN: &str = r"(?i)\b(?:(today|tomorrow)|(?:(next)\s+)?(sunday|monday|tuesday|wednesday|thursday|friday|saturday))\b";

// 12-hour first so "at 5:30pm" is not half-eaten by the 24-hour form
pub(crate) const TIME_12H_PATTERN: &str = r"(?i)\bat\s+(\d{1,2})(?::(\d{2}))?\s*(am|pm)\b";
pub(crate) const TIME_24H_PATTERN: &str = r"(?i)\bat\s+(\d{1,2}):(\d{2})\b";

/// Turn a date phrase match into a calendar day
pub(crate) fn resolve_date(caps: &Captures<'_>, reference: NaiveDate) -> Option<NaiveDate> {
    if let Some(word) = caps.get(1) {
        return match word.as_str().to_ascii_lowercase().as_str() {
            "today" => Some(reference),
            "tomorrow" => Some(add_days(reference, 1)),
            _ => None,
        };
    }

    // "next friday" and "friday" both mean the soonest Friday after today
    let weekday = parse_weekday(caps.get(3)?.as_str())?;
    Some(next_weekday(reference, weekday))
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.to_ascii_lowercase().as_str() {
        "sunday" => Some(Weekday::Sun),
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        _ => None,
    }
}

/// `at H(:MM)?(am|pm)`; None when the clock reading is impossible
pub(crate) fn resolve_12h(caps: &Captures<'_>) -> Option<NaiveTime> {
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if !(1..=12).contains(&hour) {
        return None;
    }

    let pm = caps.get(3)?.as_str().eq_ignore_ascii_case("pm");
    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// `at HH:MM` in 24-hour form
pub(crate) fn resolve_24h(caps: &Captures<'_>) -> Option<NaiveTime> {
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = caps.get(2)?.as_str().parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Find the first time phrase that resolves to a real clock time.
///
/// Returns the byte range to strip along with the time.
pub(crate) fn find_time(
    text: &str,
    twelve_hour: &Regex,
    twenty_four_hour: &Regex,
) -> Option<(std::ops::Range<usize>, NaiveTime)> {
    let from_12h = twelve_hour.captures_iter(text).find_map(|caps| {
        let range = caps.get(0)?.range();
        resolve_12h(&caps).map(|time| (range, time))
    });
    if from_12h.is_some() {
        return from_12h;
    }

    twenty_four_hour.captures_iter(text).find_map(|caps| {
        let range = caps.get(0)?.range();
        resolve_24h(&caps).map(|time| (range, time))
    })
}
