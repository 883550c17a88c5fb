/// Configuration for taskmind
///
/// Read from `~/.taskmind/config.toml`. Every key is optional; anything left
/// out keeps the built-in default. A missing file is not an error.

use crate::error::{Result, TaskmindError};
use crate::intelligence::{
    breakdown, category_balance, context_detector, due_date_defaults, overdue, pattern_detector,
    priority_mismatch, scorer,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".taskmind";
const CONFIG_FILE: &str = "config.toml";

/// Top-level config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level used when neither `RUST_LOG` nor `--verbose` is given
    pub log_level: Option<String>,
    pub suggestions: SuggestionConfig,
}

/// Thresholds and caps for the suggestion analyzers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Final list is cut to this many candidates
    pub max_suggestions: usize,

    /// Days overdue after which a task is "long overdue"
    pub long_overdue_days: i64,
    /// Description length that makes a long-overdue task a breakdown candidate
    pub overdue_description_chars: usize,

    /// Due within this many days at low/medium priority is a mismatch
    pub mismatch_window_days: i64,
    /// Due within this many days warrants urgent rather than high
    pub urgent_window_days: i64,

    /// Undated tasks younger than this are left alone
    pub undated_min_age_days: i64,
    pub undated_cap: usize,

    pub breakdown_title_chars: usize,
    pub breakdown_description_chars: usize,
    pub breakdown_cap: usize,

    pub recurring_min_group: usize,
    pub recurring_max_gap_days: f64,
    pub recurring_cap: usize,

    pub context_cap: usize,

    pub category_overload_ratio: f64,
    pub category_overload_min: usize,
    pub uncategorized_min: usize,
    pub category_balance_cap: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: scorer::MAX_SUGGESTIONS,
            long_overdue_days: overdue::LONG_OVERDUE_DAYS,
            overdue_description_chars: overdue::LONG_DESCRIPTION_CHARS,
            mismatch_window_days: priority_mismatch::MISMATCH_WINDOW_DAYS,
            urgent_window_days: priority_mismatch::URGENT_WINDOW_DAYS,
            undated_min_age_days: due_date_defaults::MIN_AGE_DAYS,
            undated_cap: due_date_defaults::MAX_RESULTS,
            breakdown_title_chars: breakdown::LONG_TITLE_CHARS,
            breakdown_description_chars: breakdown::LONG_DESCRIPTION_CHARS,
            breakdown_cap: breakdown::MAX_RESULTS,
            recurring_min_group: pattern_detector::MIN_PATTERN_OCCURRENCES,
            recurring_max_gap_days: pattern_detector::MAX_AVERAGE_GAP_DAYS,
            recurring_cap: pattern_detector::MAX_RESULTS,
            context_cap: context_detector::MAX_RESULTS,
            category_overload_ratio: category_balance::OVERLOAD_RATIO,
            category_overload_min: category_balance::OVERLOAD_MIN_TASKS,
            uncategorized_min: category_balance::UNCATEGORIZED_MIN_TASKS,
            category_balance_cap: category_balance::MAX_RESULTS,
        }
    }
}

impl SuggestionConfig {
    /// Reject values that would make analyzers meaningless
    pub fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(TaskmindError::Config(
                "suggestions.max_suggestions must be at least 1".to_string(),
            ));
        }
        if self.recurring_min_group < 2 {
            return Err(TaskmindError::Config(
                "suggestions.recurring_min_group needs at least 2 tasks to measure a gap"
                    .to_string(),
            ));
        }
        if self.recurring_max_gap_days.is_nan() || self.recurring_max_gap_days <= 0.0 {
            return Err(TaskmindError::Config(
                "suggestions.recurring_max_gap_days must be positive".to_string(),
            ));
        }
        if self.category_overload_ratio.is_nan() || self.category_overload_ratio <= 0.0 {
            return Err(TaskmindError::Config(
                "suggestions.category_overload_ratio must be positive".to_string(),
            ));
        }
        if self.urgent_window_days > self.mismatch_window_days {
            return Err(TaskmindError::Config(
                "suggestions.urgent_window_days cannot exceed mismatch_window_days".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    /// `~/.taskmind/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            TaskmindError::Config("Could not determine home directory".to_string())
        })?;
        Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load config from `path`, falling back to defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        Self::from_toml(&text)
    }

    /// Load from the default location
    pub fn load_default() -> Result<Self> {
        Self::load(Self::default_path()?)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.suggestions.validate()?;
        Ok(config)
    }
}
