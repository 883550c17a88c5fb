/// Task-side vocabulary shared by the parser, the recurrence engine and the
/// suggestion engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task priority, lowest first so `Ord` follows urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Parse a `!keyword` body such as `high` (case-insensitive)
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "urgent" => Some(Priority::Urgent),
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Parse `p1`..`p4` shorthand level (1 = urgent)
    pub fn from_shorthand(level: u8) -> Option<Self> {
        match level {
            1 => Some(Priority::Urgent),
            2 => Some(Priority::High),
            3 => Some(Priority::Medium),
            4 => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Priority::Urgent => "URGENT",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        };
        write!(f, "{}", s)
    }
}

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

/// A checklist item under a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// A task as materialized by the data-access layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default = "default_priority")]
    pub priority: Priority,
    #[serde(default, with = "flexible_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub context_id: Option<String>,
    #[serde(default)]
    pub goal_id: Option<String>,
    /// Serialized recurrence rule, if the task repeats
    #[serde(default)]
    pub recurrence: Option<String>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

fn default_priority() -> Priority {
    Priority::Medium
}

impl Task {
    /// Minimal open task, mostly useful for building snapshots by hand
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            due_date: None,
            created_at: None,
            completed_at: None,
            category_id: None,
            context_id: None,
            goal_id: None,
            recurrence: None,
            subtasks: Vec::new(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Description length in characters, zero when absent
    pub fn description_len(&self) -> usize {
        self.description
            .as_deref()
            .map(|d| d.chars().count())
            .unwrap_or(0)
    }

    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }

    /// Title and description joined, for keyword matching
    pub fn searchable_text(&self) -> String {
        match &self.description {
            Some(desc) => format!("{} {}", self.title, desc),
            None => self.title.clone(),
        }
    }
}

/// Accepts either `YYYY-MM-DD` or a full RFC 3339 timestamp for due dates.
///
/// Storage layers disagree on whether a due date carries a time; only the
/// calendar day matters here. Anything else reads as no due date.
pub mod flexible_date {
    use chrono::{DateTime, NaiveDate};
    use log::warn;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(None);
        };

        if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            return Ok(Some(date));
        }

        match DateTime::parse_from_rfc3339(&raw) {
            Ok(dt) => Ok(Some(dt.date_naive())),
            Err(_) => {
                warn!("ignoring unrecognized due date '{}'", raw);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Urgent > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_priority_keywords() {
        assert_eq!(Priority::from_keyword("HIGH"), Some(Priority::High));
        assert_eq!(Priority::from_keyword("urgent"), Some(Priority::Urgent));
        assert_eq!(Priority::from_keyword("whenever"), None);
        assert_eq!(Priority::from_shorthand(1), Some(Priority::Urgent));
        assert_eq!(Priority::from_shorthand(4), Some(Priority::Low));
        assert_eq!(Priority::from_shorthand(5), None);
    }

    #[test]
    fn test_task_deserialize_partial() {
        let task: Task = serde_json::from_str(r#"{"id":"t1","title":"Pay rent"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.due_date.is_none());
        assert!(task.subtasks.is_empty());
    }

    #[test]
    fn test_due_date_accepts_timestamp() {
        let task: Task = serde_json::from_str(
            r#"{"id":"t1","title":"Ship","status":"IN_PROGRESS","dueDate":"2026-03-04T17:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 3, 4));
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn test_unreadable_due_date_is_dropped() {
        let task: Task =
            serde_json::from_str(r#"{"id":"t1","title":"Ship","dueDate":"next week"}"#).unwrap();
        assert_eq!(task.title, "Ship");
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_due_date_serializes_as_day() {
        let mut task = Task::new("t1", "Ship");
        task.due_date = NaiveDate::from_ymd_opt(2026, 3, 4);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["dueDate"], "2026-03-04");
    }

    #[test]
    fn test_description_len_counts_chars() {
        let mut task = Task::new("t1", "Café");
        task.description = Some("naïve".to_string());
        assert_eq!(task.title_len(), 4);
        assert_eq!(task.description_len(), 5);
    }
}
