// Spots tasks that are too big to act on and proposes subtasks
//
// A 90-character title or a paragraph of description with no checklist
// usually means "this is a project, not a task".

use crate::config::SuggestionConfig;
use crate::intelligence::{Analyzer, SuggestionCandidate, SuggestionType};
use crate::model::{AnalysisContext, Task};
use chrono::{DateTime, Utc};
use serde_json::json;

pub const LONG_TITLE_CHARS: usize = 60;
pub const LONG_DESCRIPTION_CHARS: usize = 150;
pub const MAX_RESULTS: usize = 3;

// First keyword found at the start of a title word picks the template
const SUBTASK_TEMPLATES: &[(&str, &[&str])] = &[
    ("plan", &["Research options", "Outline the plan", "Review and finalize"]),
    (
        "write",
        &["Outline key points", "Write a first draft", "Edit the draft", "Final review"],
    ),
    (
        "organize",
        &["Sort everything into groups", "Declutter what isn't needed", "Arrange what's left"],
    ),
];

const DEFAULT_SUBTASKS: &[&str] = &["Prepare what's needed", "Do the main work", "Review the result"];

pub struct BreakdownAnalyzer;

impl Analyzer for BreakdownAnalyzer {
    fn name(&self) -> &'static str {
        "breakdown"
    }

    fn analyze(
        &self,
        context: &AnalysisContext,
        _now: DateTime<Utc>,
        config: &SuggestionConfig,
    ) -> Vec<SuggestionCandidate> {
        context
            .active_tasks()
            .filter(|task| task.subtasks.is_empty())
            .filter(|task| {
                task.title_len() > config.breakdown_title_chars
                    || task.description_len() > config.breakdown_description_chars
            })
            .take(config.breakdown_cap)
            .map(|task| breakdown_candidate(task, config))
            .collect()
    }
}

fn breakdown_candidate(task: &Task, config: &SuggestionConfig) -> SuggestionCandidate {
    let subtasks = suggest_subtasks(&task.title);
    let reasoning = if task.title_len() > config.breakdown_title_chars {
        format!(
            "The title is {} characters long, which usually means several steps are hiding in one task",
            task.title_len()
        )
    } else {
        format!(
            "The description runs {} characters with no subtasks to track progress",
            task.description_len()
        )
    };

    SuggestionCandidate::for_task(
        SuggestionType::Breakdown,
        task,
        format!("Break \"{}\" into {} smaller steps", task.title, subtasks.len()),
        reasoning,
        json!({
            "suggestedSubtasks": subtasks,
            "titleLength": task.title_len(),
            "descriptionLength": task.description_len(),
        }),
    )
}

/// Subtask titles for a task, picked by keyword in its title
pub fn suggest_subtasks(title: &str) -> Vec<&'static str> {
    let lower = title.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    SUBTASK_TEMPLATES
        .iter()
        .find(|(keyword, _)| words.iter().any(|w| w.starts_with(keyword)))
        .map(|(_, steps)| steps.to_vec())
        .unwrap_or_else(|| DEFAULT_SUBTASKS.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::analyzer::test_support::{now, snapshot, task};
    use crate::model::{Subtask, TaskStatus};

    fn analyze(ctx: &AnalysisContext) -> Vec<SuggestionCandidate> {
        BreakdownAnalyzer.analyze(ctx, now(), &SuggestionConfig::default())
    }

    #[test]
    fn test_subtask_templates() {
        assert_eq!(suggest_subtasks("Plan the offsite").len(), 3);
        assert_eq!(suggest_subtasks("Planning session")[0], "Research options");
        assert_eq!(suggest_subtasks("Write blog post").len(), 4);
        assert_eq!(suggest_subtasks("Organize garage")[1], "Declutter what isn't needed");
        assert_eq!(suggest_subtasks("Fix the bike"), DEFAULT_SUBTASKS.to_vec());
        // "explain" contains "plan" but does not start with it
        assert_eq!(suggest_subtasks("Explain the budget"), DEFAULT_SUBTASKS.to_vec());
    }

    #[test]
    fn test_long_title_flagged() {
        let long = "Write the quarterly investor update including metrics, hiring and roadmap";
        assert!(long.chars().count() > LONG_TITLE_CHARS);

        let found = analyze(&snapshot(vec![task("t1", long), task("t2", "Short")]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].task_id.as_deref(), Some("t1"));
        assert_eq!(found[0].suggestion_type, SuggestionType::Breakdown);
        assert_eq!(found[0].metadata["suggestedSubtasks"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_long_description_flagged() {
        let mut t = task("t1", "Garage");
        t.description = Some("x".repeat(LONG_DESCRIPTION_CHARS + 1));
        let found = analyze(&snapshot(vec![t]));
        assert_eq!(found.len(), 1);
        assert!(found[0].reasoning.contains("description"));
    }

    #[test]
    fn test_existing_subtasks_or_done_skipped() {
        let long = "y".repeat(LONG_TITLE_CHARS + 1);

        let mut with_subtasks = task("t1", &long);
        with_subtasks.subtasks.push(Subtask {
            id: "s1".into(),
            title: "step".into(),
            completed: false,
        });

        let mut done = task("t2", &long);
        done.status = TaskStatus::Done;

        assert!(analyze(&snapshot(vec![with_subtasks, done])).is_empty());
    }

    #[test]
    fn test_capped() {
        let long = "z".repeat(LONG_TITLE_CHARS + 1);
        let tasks = (0..6).map(|i| task(&format!("t{}", i), &long)).collect();
        assert_eq!(analyze(&snapshot(tasks)).len(), MAX_RESULTS);
    }
}
