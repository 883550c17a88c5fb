/// taskmind library
///
/// Quick-capture parsing, recurring task dates, and heuristic suggestions
/// over a snapshot of someone's task list. Everything here is a pure
/// function of its inputs; storage and UI live elsewhere.

pub mod calendar;
pub mod capture;
pub mod config;
pub mod error;
pub mod intelligence;
pub mod logging;
pub mod model;
pub mod recurrence;

// Re-exports for convenience
pub use config::{Config, SuggestionConfig};
pub use error::{Result, TaskmindError};
