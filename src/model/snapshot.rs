/// Read-only snapshot of one user's data, handed to the suggestion engine.
///
/// The caller hydrates everything up front; nothing in this crate fetches
/// or mutates it.

use super::task::Task;
use chrono::NaiveDate;
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A habit the user tracks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub streak: u32,
}

/// A longer-term goal tasks can link to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Where a task gets done (`@home`, `@phone`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub id: String,
    pub name: String,
}

/// Everything the analyzers look at for one run
///
/// Items that fail to decode are dropped one by one; a single bad task
/// never hides the rest of the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisContext {
    #[serde(deserialize_with = "skip_unreadable")]
    pub tasks: Vec<Task>,
    #[serde(deserialize_with = "skip_unreadable")]
    pub habits: Vec<Habit>,
    #[serde(deserialize_with = "skip_unreadable")]
    pub goals: Vec<Goal>,
    #[serde(deserialize_with = "skip_unreadable")]
    pub categories: Vec<Category>,
    #[serde(deserialize_with = "skip_unreadable")]
    pub contexts: Vec<Context>,
}

// Decode each element on its own, keeping the ones that make sense
fn skip_unreadable<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("skipping unreadable snapshot item #{}: {}", index, e);
                None
            }
        })
        .collect())
}

impl AnalysisContext {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
            && self.habits.is_empty()
            && self.goals.is_empty()
            && self.categories.is_empty()
            && self.contexts.is_empty()
    }

    /// Tasks that are not done yet
    pub fn active_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.is_done())
    }

    /// First context whose name matches `name`, ignoring case and a leading `@`
    pub fn context_named(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| {
            c.name
                .trim_start_matches('@')
                .eq_ignore_ascii_case(name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_from_json() {
        let ctx: AnalysisContext = serde_json::from_str("{}").unwrap();
        assert!(ctx.is_empty());

        let ctx: AnalysisContext =
            serde_json::from_str(r#"{"tasks":[],"habits":[],"goals":[],"categories":[],"contexts":[]}"#)
                .unwrap();
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_bad_tasks_are_skipped() {
        let json = r#"{
            "tasks": [
                {"id": "t1", "title": "Pay rent", "dueDate": "2026-03-01"},
                {"id": "t2", "title": "Plan trip", "dueDate": "next week"},
                {"id": "t3", "title": "Old thing", "status": "ARCHIVED"},
                {"id": "t4"}
            ],
            "categories": [{"id": "c1", "name": "Home"}, {"name": "no id"}]
        }"#;

        let ctx: AnalysisContext = serde_json::from_str(json).unwrap();
        let ids: Vec<_> = ctx.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
        assert!(ctx.tasks[1].due_date.is_none());
        assert_eq!(ctx.categories.len(), 1);
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let ctx: AnalysisContext = serde_json::from_str(r#"{"tasks":null}"#).unwrap();
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_context_named() {
        let ctx = AnalysisContext {
            contexts: vec![
                Context { id: "c1".into(), name: "@Home".into() },
                Context { id: "c2".into(), name: "phone".into() },
            ],
            ..Default::default()
        };

        assert_eq!(ctx.context_named("home").map(|c| c.id.as_str()), Some("c1"));
        assert_eq!(ctx.context_named("PHONE").map(|c| c.id.as_str()), Some("c2"));
        assert!(ctx.context_named("gym").is_none());
    }

    #[test]
    fn test_active_tasks_skips_done() {
        let mut done = Task::new("t2", "Done thing");
        done.status = crate::model::TaskStatus::Done;
        let ctx = AnalysisContext {
            tasks: vec![Task::new("t1", "Open thing"), done],
            ..Default::default()
        };

        let ids: Vec<_> = ctx.active_tasks().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1"]);
    }
}
