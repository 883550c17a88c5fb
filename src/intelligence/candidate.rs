/// Suggestion candidates produced by the analyzers

use crate::model::Task;
use serde::{Deserialize, Serialize};

/// What kind of change a suggestion proposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionType {
    Reschedule,
    PriorityChange,
    DueDate,
    Breakdown,
    Recurring,
    Context,
    CategoryBalance,
    TaskSuggestion,
}

impl std::fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SuggestionType::Reschedule => "RESCHEDULE",
            SuggestionType::PriorityChange => "PRIORITY_CHANGE",
            SuggestionType::DueDate => "DUE_DATE",
            SuggestionType::Breakdown => "BREAKDOWN",
            SuggestionType::Recurring => "RECURRING",
            SuggestionType::Context => "CONTEXT",
            SuggestionType::CategoryBalance => "CATEGORY_BALANCE",
            SuggestionType::TaskSuggestion => "TASK_SUGGESTION",
        };
        write!(f, "{}", s)
    }
}

/// One proposed action.
///
/// `task_id` is a plain lookup key; the task may be gone by the time the
/// user accepts. `metadata` carries whatever the accept step needs, e.g.
/// `suggestedPriority` for a priority change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionCandidate {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub content: String,
    pub reasoning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    pub metadata: serde_json::Value,
}

impl SuggestionCandidate {
    /// Suggestion about a specific task
    pub fn for_task(
        suggestion_type: SuggestionType,
        task: &Task,
        content: String,
        reasoning: String,
        metadata: serde_json::Value,
    ) -> Self {
        Self {
            suggestion_type,
            content,
            reasoning,
            task_id: Some(task.id.clone()),
            metadata,
        }
    }

    /// Suggestion about the task list as a whole
    pub fn general(
        suggestion_type: SuggestionType,
        content: String,
        reasoning: String,
        metadata: serde_json::Value,
    ) -> Self {
        Self {
            suggestion_type,
            content,
            reasoning,
            task_id: None,
            metadata,
        }
    }
}
