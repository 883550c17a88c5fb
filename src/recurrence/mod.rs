/// Recurrence engine
///
/// Computes when a repeating task is due next and reads/writes the stored
/// rule format.

pub mod engine;
pub mod rule;

pub use engine::{next_occurrence, next_occurrence_at, occurrences, Occurrences};
pub use rule::{parse_rule, serialize_rule, Frequency, RecurrenceRule};
