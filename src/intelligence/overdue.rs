// Overdue tasks: reschedule them, or break them up if they've been stuck a while
//
// Recently slipped tasks just need a new date. Something that has sat
// overdue for over a week with a wall of description and no subtasks is
// probably stuck because it is too big.

use crate::calendar::{add_days, days_between, next_business_day};
use crate::config::SuggestionConfig;
use crate::intelligence::breakdown::suggest_subtasks;
use crate::intelligence::{Analyzer, SuggestionCandidate, SuggestionType};
use crate::model::{AnalysisContext, Task};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;

pub const LONG_OVERDUE_DAYS: i64 = 7;
pub const LONG_DESCRIPTION_CHARS: usize = 100;

pub struct OverdueAnalyzer;

impl Analyzer for OverdueAnalyzer {
    fn name(&self) -> &'static str {
        "overdue"
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
            .filter_map(|task| {
                let due = task.due_date?;
                let days_overdue = days_between(due, today);
                if days_overdue <= 0 {
                    return None;
                }

                let candidate = if days_overdue > config.long_overdue_days {
                    if task.description_len() > config.overdue_description_chars
                        && task.subtasks.is_empty()
                    {
                        stuck_task(task, days_overdue)
                    } else {
                        long_overdue(task, due, days_overdue, today)
                    }
                } else {
                    recently_overdue(task, due, days_overdue, today)
                };
                Some(candidate)
            })
            .collect()
    }
}

fn stuck_task(task: &Task, days_overdue: i64) -> SuggestionCandidate {
    let subtasks = suggest_subtasks(&task.title);

    SuggestionCandidate::for_task(
        SuggestionType::Breakdown,
        task,
        format!("Split \"{}\" into smaller steps", task.title),
        format!(
            "It has been overdue for {} days and has a long description but no subtasks",
            days_overdue
        ),
        json!({
            "daysOverdue": days_overdue,
            "suggestedSubtasks": subtasks,
        }),
    )
}

fn long_overdue(task: &Task, due: NaiveDate, days_overdue: i64, today: NaiveDate) -> SuggestionCandidate {
    let suggested = next_business_day(today);

    SuggestionCandidate::for_task(
        SuggestionType::Reschedule,
        task,
        format!(
            "Reschedule \"{}\" to {}",
            task.title,
            suggested.format("%A, %b %-d")
        ),
        format!(
            "It has been overdue for {} days; pick a fresh date on the next business day",
            days_overdue
        ),
        json!({
            "daysOverdue": days_overdue,
            "currentDueDate": due.format("%Y-%m-%d").to_string(),
            "suggestedDate": suggested.format("%Y-%m-%d").to_string(),
        }),
    )
}

fn recently_overdue(
    task: &Task,
    due: NaiveDate,
    days_overdue: i64,
    today: NaiveDate,
) -> SuggestionCandidate {
    let plural = if days_overdue == 1 { "" } else { "s" };

    SuggestionCandidate::for_task(
        SuggestionType::Reschedule,
        task,
        format!("Move \"{}\" to today or tomorrow", task.title),
        format!("It slipped {} day{} past its due date", days_overdue, plural),
        json!({
            "daysOverdue": days_overdue,
            "currentDueDate": due.format("%Y-%m-%d").to_string(),
            "suggestedDate": today.format("%Y-%m-%d").to_string(),
            "alternativeDate": add_days(today, 1).format("%Y-%m-%d").to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::analyzer::test_support::{day, now, snapshot, task};
    use crate::model::{Subtask, TaskStatus};
    use chrono::TimeZone;

    fn analyze(ctx: &AnalysisContext) -> Vec<SuggestionCandidate> {
        OverdueAnalyzer.analyze(ctx, now(), &SuggestionConfig::default())
    }

    fn due(id: &str, date: NaiveDate) -> Task {
        let mut t = task(id, "Renew car insurance");
        t.due_date = Some(date);
        t
    }

    #[test]
    fn test_recently_overdue_reschedules_to_today() {
        // now() is Monday 2026-03-02
        let found = analyze(&snapshot(vec![due("t1", day(2026, 2, 27))]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].suggestion_type, SuggestionType::Reschedule);
        assert_eq!(found[0].metadata["daysOverdue"], 3);
        assert_eq!(found[0].metadata["suggestedDate"], "2026-03-02");
        assert_eq!(found[0].metadata["alternativeDate"], "2026-03-03");
    }

    #[test]
    fn test_seven_days_is_still_recent() {
        let found = analyze(&snapshot(vec![due("t1", day(2026, 2, 23))]));
        assert_eq!(found[0].metadata["daysOverdue"], 7);
        assert_eq!(found[0].metadata["suggestedDate"], "2026-03-02");
    }

    #[test]
    fn test_long_overdue_goes_to_next_business_day() {
        let found = analyze(&snapshot(vec![due("t1", day(2026, 2, 20))]));
        assert_eq!(found[0].suggestion_type, SuggestionType::Reschedule);
        assert_eq!(found[0].metadata["daysOverdue"], 10);
        assert_eq!(found[0].metadata["suggestedDate"], "2026-03-03");
    }

    #[test]
    fn test_long_overdue_on_friday_skips_weekend() {
        let friday = Utc.with_ymd_and_hms(2026, 3, 6, 9, 0, 0).unwrap();
        let ctx = snapshot(vec![due("t1", day(2026, 2, 20))]);
        let found = OverdueAnalyzer.analyze(&ctx, friday, &SuggestionConfig::default());
        assert_eq!(found[0].metadata["suggestedDate"], "2026-03-09");
    }

    #[test]
    fn test_long_overdue_with_big_description_is_breakdown() {
        let mut t = due("t1", day(2026, 2, 1));
        t.description = Some("Compare quotes from three providers. ".repeat(4));
        let found = analyze(&snapshot(vec![t]));
        assert_eq!(found[0].suggestion_type, SuggestionType::Breakdown);
        assert!(found[0].metadata["suggestedSubtasks"].is_array());
    }

    #[test]
    fn test_long_overdue_with_subtasks_is_rescheduled() {
        let mut t = due("t1", day(2026, 2, 1));
        t.description = Some("Compare quotes from three providers. ".repeat(4));
        t.subtasks.push(Subtask {
            id: "s1".into(),
            title: "Get quotes".into(),
            completed: false,
        });

        let found = analyze(&snapshot(vec![t]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].suggestion_type, SuggestionType::Reschedule);
        assert_eq!(found[0].metadata["suggestedDate"], "2026-03-03");
    }

    #[test]
    fn test_not_overdue_or_done_ignored() {
        let today = due("t1", day(2026, 3, 2));
        let future = due("t2", day(2026, 3, 10));
        let mut done = due("t3", day(2026, 2, 1));
        done.status = TaskStatus::Done;
        let undated = task("t4", "Someday");

        assert!(analyze(&snapshot(vec![today, future, done, undated])).is_empty());
    }
}
