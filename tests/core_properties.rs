// End-to-end checks across capture, recurrence and suggestions through the
// public library surface.

use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;
use taskmind_lib::capture::{contains_recognized_tokens, parse, render_preview};
use taskmind_lib::intelligence::{generate, SuggestionType};
use taskmind_lib::model::{AnalysisContext, Priority};
use taskmind_lib::recurrence::{next_occurrence, parse_rule, serialize_rule, RecurrenceRule};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_capture_line_to_preview() {
    // Sunday
    let parsed = parse("Call mom next monday at 5pm !high #family @phone", day(2026, 2, 22));

    assert_eq!(parsed.title, "Call mom");
    assert_eq!(parsed.priority, Some(Priority::High));
    assert_eq!(parsed.categories, vec!["family"]);
    assert_eq!(parsed.contexts, vec!["phone"]);
    assert_eq!(parsed.due_date, Some(day(2026, 2, 23)));
    assert_eq!(parsed.due_time_label().as_deref(), Some("17:00"));

    let preview = render_preview(&parsed);
    assert!(preview.starts_with("High priority"));
    assert!(preview.contains("#family"));
    assert!(preview.contains("at 17:00"));
}

#[test]
fn test_plain_text_is_only_a_title() {
    let parsed = parse("Buy milk", day(2026, 2, 22));
    assert_eq!(parsed.title, "Buy milk");
    assert!(!parsed.has_signals());
    assert_eq!(render_preview(&parsed), "");
    assert!(!contains_recognized_tokens("Buy milk"));
}

#[test]
fn test_precheck_never_misses_a_parsed_field() {
    let samples = [
        "Pay rent p2",
        "Dentist friday",
        "Standup at 9:30",
        "#errands",
        "Ping @work today",
        "nothing here",
    ];
    for sample in samples {
        if parse(sample, day(2026, 2, 22)).has_signals() {
            assert!(contains_recognized_tokens(sample), "missed {:?}", sample);
        }
    }
}

#[test]
fn test_recurrence_reference_dates() {
    assert_eq!(next_occurrence(day(2026, 2, 28), &RecurrenceRule::daily()), day(2026, 3, 1));
    assert_eq!(
        next_occurrence(day(2026, 2, 27), &RecurrenceRule::weekly_on([1, 3, 5])),
        day(2026, 3, 2)
    );
    assert_eq!(next_occurrence(day(2026, 1, 31), &RecurrenceRule::monthly()), day(2026, 2, 28));
    assert_eq!(next_occurrence(day(2024, 2, 29), &RecurrenceRule::yearly()), day(2025, 2, 28));
}

#[test]
fn test_rule_text_round_trip() {
    let rule = RecurrenceRule::weekly_on([1, 3, 5]);
    assert_eq!(parse_rule(&serialize_rule(&rule)), Some(rule));
    assert_eq!(parse_rule("not json"), None);
    assert_eq!(parse_rule(r#"{"frequency":42}"#), None);
}

#[test]
fn test_suggestions_from_json_snapshot() {
    let snapshot: AnalysisContext = serde_json::from_value(json!({
        "tasks": [
            {"id": "t1", "title": "Renew passport", "dueDate": "2026-02-27", "priority": "MEDIUM"},
            {"id": "t2", "title": "Loose 1"},
            {"id": "t3", "title": "Loose 2"},
            {"id": "t4", "title": "Loose 3"},
            {"id": "t5", "title": "Loose 4"},
            {"id": "t6", "title": "Loose 5"},
            {"id": "t7", "title": "Loose 6"}
        ],
        "categories": [
            {"id": "c1", "name": "Work"},
            {"id": "c2", "name": "Home"}
        ]
    }))
    .unwrap();

    let now = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
    let suggestions = generate(&snapshot, now);

    assert!(suggestions.len() <= 15);
    assert_eq!(suggestions[0].suggestion_type, SuggestionType::Reschedule);
    assert_eq!(suggestions[0].task_id.as_deref(), Some("t1"));
    assert_eq!(
        suggestions.last().map(|s| s.suggestion_type),
        Some(SuggestionType::CategoryBalance)
    );

    assert_eq!(generate(&snapshot, now), suggestions);

    let encoded = serde_json::to_value(&suggestions[0]).unwrap();
    assert_eq!(encoded["type"], "RESCHEDULE");
    assert_eq!(encoded["taskId"], "t1");
}

#[test]
fn test_empty_snapshot() {
    let now = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
    assert!(generate(&AnalysisContext::default(), now).is_empty());
}
