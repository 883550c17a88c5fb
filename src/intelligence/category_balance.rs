// Category balance: one category hogging the list, or lots of loose tasks
//
// Only meaningful once there are at least two categories to compare.

use crate::config::SuggestionConfig;
use crate::intelligence::{Analyzer, SuggestionCandidate, SuggestionType};
use crate::model::{AnalysisContext, Category};
use chrono::{DateTime, Utc};
use log::warn;
use serde_json::json;

pub const OVERLOAD_RATIO: f64 = 2.0;
pub const OVERLOAD_MIN_TASKS: usize = 5;
pub const UNCATEGORIZED_MIN_TASKS: usize = 5;
pub const MAX_RESULTS: usize = 2;

const MIN_CATEGORIES: usize = 2;

pub struct CategoryBalanceAnalyzer;

impl Analyzer for CategoryBalanceAnalyzer {
    fn name(&self) -> &'static str {
        "category_balance"
    }

    fn analyze(
        &self,
        context: &AnalysisContext,
        _now: DateTime<Utc>,
        config: &SuggestionConfig,
    ) -> Vec<SuggestionCandidate> {
        if context.categories.len() < MIN_CATEGORIES {
            return Vec::new();
        }

        let mut counts = vec![0usize; context.categories.len()];
        let mut uncategorized = 0usize;

        for task in context.active_tasks() {
            match task.category_id.as_deref() {
                Some(id) => match context.categories.iter().position(|c| c.id == id) {
                    Some(index) => counts[index] += 1,
                    None => warn!("task {} points at unknown category {}, skipping", task.id, id),
                },
                None => uncategorized += 1,
            }
        }

        let mut candidates = Vec::new();

        if let Some(candidate) = overloaded(&context.categories, &counts, config) {
            candidates.push(candidate);
        }

        if uncategorized > config.uncategorized_min {
            candidates.push(needs_categories(uncategorized));
        }

        candidates.truncate(config.category_balance_cap);
        candidates
    }
}

fn overloaded(
    categories: &[Category],
    counts: &[usize],
    config: &SuggestionConfig,
) -> Option<SuggestionCandidate> {
    let total: usize = counts.iter().sum();
    let mean = total as f64 / categories.len() as f64;

    // Earliest category wins a tie
    let mut busiest = 0;
    for (index, count) in counts.iter().enumerate() {
        if *count > counts[busiest] {
            busiest = index;
        }
    }

    let active = counts[busiest];
    if active as f64 <= config.category_overload_ratio * mean || active <= config.category_overload_min {
        return None;
    }

    let category = &categories[busiest];
    let average = (mean * 10.0).round() / 10.0;

    Some(SuggestionCandidate::general(
        SuggestionType::CategoryBalance,
        format!("Spread out the work in \"{}\"", category.name),
        format!(
            "It has {} active tasks while your categories average {:.1}",
            active, mean
        ),
        json!({
            "kind": "redistribute",
            "categoryId": category.id,
            "categoryName": category.name,
            "activeTasks": active,
            "averageTasks": average,
        }),
    ))
}

fn needs_categories(uncategorized: usize) -> SuggestionCandidate {
    SuggestionCandidate::general(
        SuggestionType::CategoryBalance,
        "Sort your uncategorized tasks into categories".to_string(),
        format!("{} active tasks have no category", uncategorized),
        json!({
            "kind": "categorize",
            "uncategorizedTasks": uncategorized,
        }),
    )
}
