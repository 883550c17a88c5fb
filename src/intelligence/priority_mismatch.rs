// Priority that doesn't match the calendar
//
// Due in two days but marked low? Probably should be higher. Marked urgent
// but no due date? Probably should have one.

use crate::calendar::{days_between, next_business_day};
use crate::config::SuggestionConfig;
use crate::intelligence::{Analyzer, SuggestionCandidate, SuggestionType};
use crate::model::{AnalysisContext, Priority, Task};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;

pub const MISMATCH_WINDOW_DAYS: i64 = 3;
pub const URGENT_WINDOW_DAYS: i64 = 1;

pub struct PriorityMismatchAnalyzer;

impl Analyzer for PriorityMismatchAnalyzer {
    fn name(&self) -> &'static str {
        "priority_mismatch"
    }

    fn analyze(
        &self,
        context: &AnalysisContext,
        now: DateTime<Utc>,
        config: &SuggestionConfig,
    ) -> Vec<SuggestionCandidate> {
        let today = now.date_naive();

        context
            .active_tasks()
            .filter_map(|task| match task.due_date {
                Some(due) => underprioritized(task, due, today, config),
                None => undated_important(task, today),
            })
            .collect()
    }
}

fn underprioritized(
    task: &Task,
    due: NaiveDate,
    today: NaiveDate,
    config: &SuggestionConfig,
) -> Option<SuggestionCandidate> {
    if !matches!(task.priority, Priority::Low | Priority::Medium) {
        return None;
    }

    let days_until = days_between(today, due);
    if !(0..=config.mismatch_window_days).contains(&days_until) {
        return None;
    }

    let suggested = if days_until <= config.urgent_window_days {
        Priority::Urgent
    } else {
        Priority::High
    };

    let when = match days_until {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        n => format!("in {} days", n),
    };

    Some(SuggestionCandidate::for_task(
        SuggestionType::PriorityChange,
        task,
        format!(
            "Raise \"{}\" from {} to {}",
            task.title,
            task.priority.label(),
            suggested.label()
        ),
        format!(
            "It is due {} but marked {} priority",
            when,
            task.priority.label().to_lowercase()
        ),
        json!({
            "currentPriority": task.priority,
            "suggestedPriority": suggested,
            "daysUntilDue": days_until,
        }),
    ))
}

fn undated_important(task: &Task, today: NaiveDate) -> Option<SuggestionCandidate> {
    if task.priority < Priority::High {
        return None;
    }

    let suggested = next_business_day(today);

    Some(SuggestionCandidate::for_task(
        SuggestionType::DueDate,
        task,
        format!(
            "Give \"{}\" a due date of {}",
            task.title,
            suggested.format("%A, %b %-d")
        ),
        format!(
            "It is marked {} priority but has no due date",
            task.priority.label().to_lowercase()
        ),
        json!({
            "priority": task.priority,
            "suggestedDate": suggested.format("%Y-%m-%d").to_string(),
        }),
    ))
}
