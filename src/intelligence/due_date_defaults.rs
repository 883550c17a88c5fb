// Undated tasks get a proposed due date based on their priority
//
// Leaves brand-new tasks alone for a day so the user has a chance to date
// them on their own.

use crate::calendar::{add_days, roll_to_business_day};
use crate::config::SuggestionConfig;
use crate::intelligence::{Analyzer, SuggestionCandidate, SuggestionType};
use crate::model::{AnalysisContext, Priority, Task};
use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use serde_json::json;

pub const MIN_AGE_DAYS: i64 = 1;
pub const MAX_RESULTS: usize = 5;

/// Days from today to propose, by priority
pub fn offset_days(priority: Priority) -> u64 {
    match priority {
        Priority::Urgent => 1,
        Priority::High => 3,
        Priority::Medium => 7,
        Priority::Low => 14,
    }
}

pub struct DueDateDefaultsAnalyzer;

impl Analyzer for DueDateDefaultsAnalyzer {
    fn name(&self) -> &'static str {
        "due_date_defaults"
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
            .filter(|task| task.due_date.is_none())
            .filter(|task| match task.created_at {
                Some(created) => (now - created).num_days() >= config.undated_min_age_days,
                None => {
                    warn!("task {} has no creation time, skipping", task.id);
                    false
                }
            })
            .take(config.undated_cap)
            .map(|task| default_due_date(task, today))
            .collect()
    }
}

fn default_due_date(task: &Task, today: NaiveDate) -> SuggestionCandidate {
    let offset = offset_days(task.priority);
    let suggested = roll_to_business_day(add_days(today, offset));

    SuggestionCandidate::for_task(
        SuggestionType::DueDate,
        task,
        format!(
            "Set \"{}\" due {}",
            task.title,
            suggested.format("%A, %b %-d")
        ),
        format!(
            "It has no due date; {} priority tasks usually fit within {} days",
            task.priority.label().to_lowercase(),
            offset
        ),
        json!({
            "priority": task.priority,
            "offsetDays": offset,
            "suggestedDate": suggested.format("%Y-%m-%d").to_string(),
        }),
    )
}
