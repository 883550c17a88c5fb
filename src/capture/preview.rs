/// One-line summary of a parsed capture, shown under the input box

use super::parsed::ParsedCapture;

const SEPARATOR: &str = " · ";

/// Human-readable summary of whatever the parser found.
///
/// Empty when nothing beyond the title was recognized.
pub fn render_preview(parsed: &ParsedCapture) -> String {
    let mut parts = Vec::new();

    if let Some(priority) = parsed.priority {
        parts.push(format!("{} priority", priority.label()));
    }

    if !parsed.categories.is_empty() {
        parts.push(join_prefixed('#', &parsed.categories));
    }

    if !parsed.contexts.is_empty() {
        parts.push(join_prefixed('@', &parsed.contexts));
    }

    if let Some(date) = parsed.due_date {
        parts.push(format!("Due {}", date.format("%a %b %-d, %Y")));
    }

    if let Some(time) = parsed.due_time_label() {
        parts.push(format!("at {}", time));
    }

    parts.join(SEPARATOR)
}

fn join_prefixed(prefix: char, items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::parse;
    use chrono::NaiveDate;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 22).unwrap()
    }

    #[test]
    fn test_preview_empty_when_nothing_parsed() {
        let parsed = parse("Buy milk", reference());
        assert_eq!(render_preview(&parsed), "");
    }

    #[test]
    fn test_preview_lists_fields_in_order() {
        let parsed = parse("Call dentist p2 #health #admin @phone tomorrow at 9am", reference());
        assert_eq!(
            render_preview(&parsed),
            "High priority · #health #admin · @phone · Due Mon Feb 23, 2026 · at 09:00"
        );
    }

    #[test]
    fn test_preview_time_only() {
        let parsed = parse("Alarm at 6:45am", reference());
        assert_eq!(render_preview(&parsed), "at 06:45");
    }
}
