/// Context detection for smart suggestions
///
/// Guesses where a task gets done (home, work, phone...) from the words in
/// it, and points it at the user's matching context.

use crate::config::SuggestionConfig;
use crate::intelligence::{Analyzer, SuggestionCandidate, SuggestionType};
use crate::model::{AnalysisContext, Context, Task};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;

pub const MAX_RESULTS: usize = 5;

/// Checked in order; the first entry with a hit wins
pub const CONTEXT_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "home",
        &["clean", "laundry", "dishes", "vacuum", "cook", "garden", "house", "home"],
    ),
    (
        "work",
        &["meeting", "report", "presentation", "client", "deadline", "project", "office"],
    ),
    (
        "computer",
        &["email", "code", "website", "online", "download", "update", "spreadsheet"],
    ),
    ("phone", &["call", "phone", "text", "ring", "voicemail"]),
    (
        "errands",
        &["buy", "pick up", "drop off", "store", "shop", "groceries", "pharmacy", "bank", "post office"],
    ),
    (
        "gym",
        &["workout", "exercise", "run", "gym", "yoga", "lift", "swim", "training"],
    ),
];

static CONTEXT_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    CONTEXT_KEYWORDS
        .iter()
        .filter_map(|(name, keywords)| {
            let alternatives = keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives))
                .ok()
                .map(|re| (*name, re))
        })
        .collect()
});

/// Context detector
pub struct ContextDetector;

impl Analyzer for ContextDetector {
    fn name(&self) -> &'static str {
        "context"
    }

    fn analyze(
        &self,
        context: &AnalysisContext,
        _now: DateTime<Utc>,
        config: &SuggestionConfig,
    ) -> Vec<SuggestionCandidate> {
        if context.contexts.is_empty() {
            return Vec::new();
        }

        context
            .active_tasks()
            .filter(|task| task.context_id.is_none())
            .filter_map(|task| {
                let (name, keyword) = Self::detect(task)?;
                let target = context.context_named(name)?;
                Some(Self::context_candidate(task, target, &keyword))
            })
            .take(config.context_cap)
            .collect()
    }
}

impl ContextDetector {
    /// Table entry and matched word for a task, if any
    pub fn detect(task: &Task) -> Option<(&'static str, String)> {
        let text = task.searchable_text();

        CONTEXT_PATTERNS.iter().find_map(|(name, re)| {
            re.find(text.as_str())
                .map(|m| (*name, m.as_str().to_lowercase()))
        })
    }

    fn context_candidate(task: &Task, target: &Context, keyword: &str) -> SuggestionCandidate {
        SuggestionCandidate::for_task(
            SuggestionType::Context,
            task,
            format!("Add \"{}\" to {}", task.title, target.name),
            format!("It mentions \"{}\", which is usually done in {}", keyword, target.name),
            json!({
                "contextId": target.id,
                "contextName": target.name,
                "matchedKeyword": keyword,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::analyzer::test_support::{context, now, task};
    use crate::model::TaskStatus;

    fn with_contexts(tasks: Vec<Task>) -> AnalysisContext {
        AnalysisContext {
            tasks,
            contexts: vec![
                context("c-home", "@home"),
                context("c-work", "Work"),
                context("c-phone", "phone"),
            ],
            ..Default::default()
        }
    }

    fn analyze(ctx: &AnalysisContext) -> Vec<SuggestionCandidate> {
        ContextDetector.analyze(ctx, now(), &SuggestionConfig::default())
    }

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(CONTEXT_PATTERNS.len(), CONTEXT_KEYWORDS.len());
    }

    #[test]
    fn test_detect_first_entry_wins() {
        // "call" (phone) and "report" (work): work comes first in the table
        let t = task("t1", "Call Sam about the report");
        assert_eq!(ContextDetector::detect(&t), Some(("work", "report".to_string())));
    }

    #[test]
    fn test_detect_whole_words_only() {
        assert_eq!(ContextDetector::detect(&task("t1", "Recall the plan")), None);
        // "cleaning" is not "clean"; "pick up" is errands
        assert_eq!(
            ContextDetector::detect(&task("t2", "Pick up dry cleaning")).map(|(n, _)| n),
            Some("errands")
        );
    }

    #[test]
    fn test_description_is_searched() {
        let mut t = task("t1", "Sam");
        t.description = Some("Give them a ring tonight".to_string());
        assert_eq!(ContextDetector::detect(&t).map(|(n, _)| n), Some("phone"));
    }

    #[test]
    fn test_suggests_matching_user_context() {
        let found = analyze(&with_contexts(vec![task("t1", "Do the laundry")]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].suggestion_type, SuggestionType::Context);
        assert_eq!(found[0].metadata["contextId"], "c-home");
        assert_eq!(found[0].metadata["matchedKeyword"], "laundry");
    }

    #[test]
    fn test_skipped_without_matching_user_context() {
        // "groceries" is errands; the user has no errands context
        assert!(analyze(&with_contexts(vec![task("t1", "Get groceries")])).is_empty());
    }

    #[test]
    fn test_noop_without_contexts() {
        let ctx = AnalysisContext {
            tasks: vec![task("t1", "Do the laundry")],
            ..Default::default()
        };
        assert!(analyze(&ctx).is_empty());
    }

    #[test]
    fn test_assigned_or_done_skipped() {
        let mut assigned = task("t1", "Do the laundry");
        assigned.context_id = Some("c-home".to_string());
        let mut done = task("t2", "Call the dentist");
        done.status = TaskStatus::Done;

        assert!(analyze(&with_contexts(vec![assigned, done])).is_empty());
    }

    #[test]
    fn test_capped_at_five() {
        let tasks = (0..8).map(|i| task(&format!("t{}", i), "Call mom")).collect();
        assert_eq!(analyze(&with_contexts(tasks)).len(), MAX_RESULTS);
    }
}
