/// Suggestion engine
///
/// Runs every analyzer over a snapshot and ranks what they come up with.

use crate::config::SuggestionConfig;
use crate::intelligence::{
    Analyzer, BreakdownAnalyzer, CategoryBalanceAnalyzer, ContextDetector, DueDateDefaultsAnalyzer,
    OverdueAnalyzer, PatternDetector, PriorityMismatchAnalyzer, Scorer, SuggestionCandidate,
};
use crate::model::AnalysisContext;
use chrono::{DateTime, Utc};
use log::debug;

/// Suggestion engine
pub struct SuggestionEngine {
    config: SuggestionConfig,
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionEngine {
    /// Engine with the built-in thresholds
    pub fn new() -> Self {
        Self::with_config(SuggestionConfig::default())
    }

    pub fn with_config(config: SuggestionConfig) -> Self {
        let analyzers: Vec<Box<dyn Analyzer>> = vec![
            Box::new(OverdueAnalyzer),
            Box::new(PriorityMismatchAnalyzer),
            Box::new(DueDateDefaultsAnalyzer),
            Box::new(BreakdownAnalyzer),
            Box::new(PatternDetector),
            Box::new(ContextDetector),
            Box::new(CategoryBalanceAnalyzer),
        ];

        Self { config, analyzers }
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Generate ranked suggestions for a snapshot
    ///
    /// Pure over `(context, now)`: the same inputs always give the same
    /// list. An empty snapshot gives an empty list.
    pub fn generate(&self, context: &AnalysisContext, now: DateTime<Utc>) -> Vec<SuggestionCandidate> {
        let mut candidates = Vec::new();

        for analyzer in &self.analyzers {
            let found = analyzer.analyze(context, now, &self.config);
            debug!("{} produced {} candidates", analyzer.name(), found.len());
            candidates.extend(found);
        }

        let ranked = Scorer::rank(candidates, self.config.max_suggestions);
        debug!("returning {} suggestions", ranked.len());
        ranked
    }
}

/// Generate suggestions with the default thresholds
pub fn generate(context: &AnalysisContext, now: DateTime<Utc>) -> Vec<SuggestionCandidate> {
    SuggestionEngine::new().generate(context, now)
}
