/// Data model shared across the intelligence core
///
/// Priorities, tasks and the snapshot the suggestion engine reads.

pub mod snapshot;
pub mod task;

pub use snapshot::*;
pub use task::*;
