/// Intelligence module
///
/// Heuristic suggestions over a snapshot of the user's tasks.

pub mod analyzer;
pub mod breakdown;
pub mod candidate;
pub mod category_balance;
pub mod context_detector;
pub mod due_date_defaults;
pub mod overdue;
pub mod pattern_detector;
pub mod priority_mismatch;
pub mod scorer;
pub mod suggestion_engine;

pub use analyzer::Analyzer;
pub use breakdown::BreakdownAnalyzer;
pub use candidate::{SuggestionCandidate, SuggestionType};
pub use category_balance::CategoryBalanceAnalyzer;
pub use context_detector::ContextDetector;
pub use due_date_defaults::DueDateDefaultsAnalyzer;
pub use overdue::OverdueAnalyzer;
pub use pattern_detector::{Cadence, Pattern, PatternDetector};
pub use priority_mismatch::PriorityMismatchAnalyzer;
pub use scorer::Scorer;
pub use suggestion_engine::{generate, SuggestionEngine};
