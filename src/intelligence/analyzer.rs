/// Common interface for the suggestion analyzers
///
/// Each analyzer looks at the whole snapshot and returns its own candidates.
/// They share nothing, so they can be run and tested one at a time.

use crate::config::SuggestionConfig;
use crate::intelligence::SuggestionCandidate;
use crate::model::AnalysisContext;
use chrono::{DateTime, Utc};

/// A single heuristic over the snapshot
pub trait Analyzer: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Candidates for this heuristic, already capped.
    ///
    /// `now` is the caller's clock; analyzers never read the system time.
    /// Items that cannot be interpreted are skipped, never reported as errors.
    fn analyze(
        &self,
        context: &AnalysisContext,
        now: DateTime<Utc>,
        config: &SuggestionConfig,
    ) -> Vec<SuggestionCandidate>;
}
