// Finds tasks you keep re-creating by hand
//
// Like when "Water plants" gets completed every Sunday, or "Pay rent 03",
// "Pay rent 04", "Pay rent 05" show up once a month. Those should be one
// recurring task instead.

use crate::config::SuggestionConfig;
use crate::intelligence::{Analyzer, SuggestionCandidate, SuggestionType};
use crate::model::{AnalysisContext, Task};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::BTreeMap;

// Need to see something at least 3 times before calling it a pattern
pub const MIN_PATTERN_OCCURRENCES: usize = 3;

// Average gaps this long or longer are coincidence, not a cadence
pub const MAX_AVERAGE_GAP_DAYS: f64 = 90.0;

pub const MAX_RESULTS: usize = 2;

// Titles are compared on their first 30 letters
const NORMALIZED_TITLE_CHARS: usize = 30;

const DAILY_MAX_GAP_DAYS: f64 = 1.5;
const WEEKLY_MAX_GAP_DAYS: f64 = 8.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Cadence inferred from completion gaps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    Daily,
    Weekly,
    Monthly,
}

impl Cadence {
    /// Anything slower than ~monthly still gets a monthly suggestion
    pub fn from_average_gap(days: f64) -> Self {
        if days <= DAILY_MAX_GAP_DAYS {
            Cadence::Daily
        } else if days <= WEEKLY_MAX_GAP_DAYS {
            Cadence::Weekly
        } else {
            Cadence::Monthly
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cadence::Daily => "daily",
            Cadence::Weekly => "weekly",
            Cadence::Monthly => "monthly",
        }
    }
}

/// A group of completed tasks that look like the same chore
#[derive(Debug, Clone)]
pub struct Pattern<'a> {
    pub key: String,
    pub tasks: Vec<&'a Task>,
    pub average_gap_days: f64,
    pub cadence: Cadence,
}

impl<'a> Pattern<'a> {
    /// Most recently completed member
    pub fn latest(&self) -> Option<&'a Task> {
        self.tasks.last().copied()
    }
}

pub struct PatternDetector;

impl Analyzer for PatternDetector {
    fn name(&self) -> &'static str {
        "recurring_patterns"
    }

    fn analyze(
        &self,
        context: &AnalysisContext,
        _now: DateTime<Utc>,
        config: &SuggestionConfig,
    ) -> Vec<SuggestionCandidate> {
        self.detect_patterns(context, config)
            .into_iter()
            .filter_map(|pattern| self.pattern_candidate(&pattern))
            .take(config.recurring_cap)
            .collect()
    }
}

impl PatternDetector {
    /// Groups of completed tasks with a believable cadence, biggest first
    pub fn detect_patterns<'a>(
        &self,
        context: &'a AnalysisContext,
        config: &SuggestionConfig,
    ) -> Vec<Pattern<'a>> {
        let mut patterns: Vec<Pattern<'a>> = self
            .group_completed(context)
            .into_iter()
            .filter(|(_, tasks)| tasks.len() >= config.recurring_min_group)
            .filter_map(|(key, mut tasks)| {
                tasks.sort_by_key(|t| t.completed_at);
                let average_gap_days = self.average_gap_days(&tasks)?;

                if average_gap_days <= 0.0 || average_gap_days >= config.recurring_max_gap_days {
                    return None;
                }

                Some(Pattern {
                    key,
                    tasks,
                    average_gap_days,
                    cadence: Cadence::from_average_gap(average_gap_days),
                })
            })
            .collect();

        // Stable: equal sizes keep alphabetical key order from the BTreeMap
        patterns.sort_by(|a, b| b.tasks.len().cmp(&a.tasks.len()));
        patterns
    }

    /// Completed tasks keyed by normalized title
    fn group_completed<'a>(&self, context: &'a AnalysisContext) -> BTreeMap<String, Vec<&'a Task>> {
        let mut groups: BTreeMap<String, Vec<&'a Task>> = BTreeMap::new();

        for task in context.tasks.iter().filter(|t| t.is_done()) {
            if task.completed_at.is_none() {
                continue;
            }

            let key = normalize_title(&task.title);
            if key.is_empty() {
                continue;
            }

            groups.entry(key).or_default().push(task);
        }

        groups
    }

    /// Mean gap between consecutive completions, in days
    fn average_gap_days(&self, sorted: &[&Task]) -> Option<f64> {
        let times: Vec<DateTime<Utc>> = sorted.iter().filter_map(|t| t.completed_at).collect();
        if times.len() < 2 {
            return None;
        }

        let total: f64 = times
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).num_seconds() as f64 / SECONDS_PER_DAY)
            .sum();

        Some(total / (times.len() - 1) as f64)
    }

    fn pattern_candidate(&self, pattern: &Pattern<'_>) -> Option<SuggestionCandidate> {
        let latest = pattern.latest()?;

        // Already set up to repeat; nothing to suggest
        if latest.recurrence.is_some() {
            return None;
        }

        let cadence = pattern.cadence.as_str();
        let task_ids: Vec<&str> = pattern.tasks.iter().map(|t| t.id.as_str()).collect();

        Some(SuggestionCandidate::for_task(
            SuggestionType::Recurring,
            latest,
            format!("Make \"{}\" a {} recurring task", latest.title, cadence),
            format!(
                "You've completed this {} times, about every {:.1} days",
                pattern.tasks.len(),
                pattern.average_gap_days
            ),
            json!({
                "suggestedFrequency": cadence,
                "occurrences": pattern.tasks.len(),
                "averageGapDays": (pattern.average_gap_days * 10.0).round() / 10.0,
                "normalizedTitle": pattern.key,
                "taskIds": task_ids,
            }),
        ))
    }
}

/// Lowercase letters and single spaces, first 30 characters.
///
/// Everything else is dropped outright: "Pay rent (03/2026)" becomes
/// "pay rent" and "E-mail boss" becomes "email boss".
pub fn normalize_title(title: &str) -> String {
    let letters: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();

    let collapsed = letters.split_whitespace().collect::<Vec<_>>().join(" ");

    collapsed
        .chars()
        .take(NORMALIZED_TITLE_CHARS)
        .collect::<String>()
        .trim_end()
        .to_string()
}
