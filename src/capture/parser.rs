// Quick-capture tokenizer
//
// Turns "Call dentist !high #health @phone tomorrow at 9am" into a title plus
// structured fields. Each step strips what it recognized before the next one
// runs, so a token is only ever claimed once.

use super::parsed::ParsedCapture;
use super::phrases::{find_time, resolve_date, DATE_PATTERN, TIME_12H_PATTERN, TIME_24H_PATTERN};
use crate::model::Priority;
use chrono::NaiveDate;
use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// `p1`..`p4` must stand alone so "help1" or "ap2" stay in the title; the `!`
// form is marked already and may touch the preceding word
static RE_PRIORITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)!(urgent|high|medium|low)\b|\bp([1-4])\b").expect("valid priority regex")
});

static RE_CATEGORY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([\w-]+)").expect("valid category regex"));

static RE_CONTEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([\w-]+)").expect("valid context regex"));

static RE_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(DATE_PATTERN).expect("valid date regex"));

static RE_TIME_12H: Lazy<Regex> =
    Lazy::new(|| Regex::new(TIME_12H_PATTERN).expect("valid 12-hour time regex"));

static RE_TIME_24H: Lazy<Regex> =
    Lazy::new(|| Regex::new(TIME_24H_PATTERN).expect("valid 24-hour time regex"));

/// Parse a capture line.
///
/// `reference` is "today" for relative words like `tomorrow`; the wall clock
/// is never consulted. Never fails: anything unrecognized stays in the title.
pub fn parse(raw_input: &str, reference: NaiveDate) -> ParsedCapture {
    let mut text = raw_input.to_string();

    let priority = extract_priority(&mut text);
    let categories = extract_tags(&RE_CATEGORY, &mut text);
    let contexts = extract_tags(&RE_CONTEXT, &mut text);
    let due_date = extract_date(&mut text, reference);

    let due_time = match find_time(&text, &RE_TIME_12H, &RE_TIME_24H) {
        Some((range, time)) => {
            text.replace_range(range, " ");
            Some(time)
        }
        None => None,
    };

    let title = collapse_whitespace(&text);
    trace!(
        "capture parsed: priority={:?} categories={} contexts={} date={:?} time={:?}",
        priority,
        categories.len(),
        contexts.len(),
        due_date,
        due_time
    );

    ParsedCapture {
        title,
        raw_input: raw_input.to_string(),
        priority,
        categories,
        contexts,
        due_date,
        due_time,
    }
}

/// Cheap check for whether `parse` would fill in anything beyond the title.
///
/// May say yes when the parser ends up finding nothing (e.g. `at 13pm`),
/// never the other way round.
pub fn contains_recognized_tokens(text: &str) -> bool {
    RE_PRIORITY.is_match(text)
        || RE_CATEGORY.is_match(text)
        || RE_CONTEXT.is_match(text)
        || RE_DATE.is_match(text)
        || RE_TIME_12H.is_match(text)
        || RE_TIME_24H.is_match(text)
}

// First priority token wins; the rest are stripped and ignored
fn extract_priority(text: &mut String) -> Option<Priority> {
    let mut priority = None;

    let stripped = RE_PRIORITY.replace_all(text.as_str(), |caps: &Captures<'_>| {
        let found = match (caps.get(1), caps.get(2)) {
            (Some(word), _) => Priority::from_keyword(word.as_str()),
            (None, Some(level)) => level
                .as_str()
                .parse::<u8>()
                .ok()
                .and_then(Priority::from_shorthand),
            (None, None) => None,
        };
        if priority.is_none() {
            priority = found;
        }
        " ".to_string()
    });

    *text = stripped.into_owned();
    priority
}

// Collects every #tag / @context, lowercased, in order, duplicates kept
fn extract_tags(pattern: &Regex, text: &mut String) -> Vec<String> {
    let mut tags = Vec::new();

    let stripped = pattern.replace_all(text.as_str(), |caps: &Captures<'_>| {
        if let Some(tag) = caps.get(1) {
            tags.push(tag.as_str().to_lowercase());
        }
        " ".to_string()
    });

    *text = stripped.into_owned();
    tags
}

fn extract_date(text: &mut String, reference: NaiveDate) -> Option<NaiveDate> {
    let (range, date) = RE_DATE.captures_iter(text.as_str()).find_map(|caps| {
        let range = caps.get(0)?.range();
        resolve_date(&caps, reference).map(|date| (range, date))
    })?;

    text.replace_range(range, " ");
    Some(date)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
