/// Ranking for suggestion candidates
///
/// Orders candidates by how urgent their kind of change is, then cuts the
/// list down to what fits on screen.

use crate::intelligence::{SuggestionCandidate, SuggestionType};

pub const MAX_SUGGESTIONS: usize = 15;

/// Ranker for suggestion candidates
pub struct Scorer;

impl Scorer {
    /// Rank of a suggestion type, lower comes first
    pub fn type_priority(suggestion_type: SuggestionType) -> u8 {
        match suggestion_type {
            SuggestionType::Reschedule => 0,
            SuggestionType::PriorityChange => 1,
            SuggestionType::DueDate => 2,
            SuggestionType::Breakdown => 3,
            SuggestionType::Recurring => 4,
            SuggestionType::Context => 5,
            SuggestionType::CategoryBalance => 6,
            SuggestionType::TaskSuggestion => 7,
        }
    }

    /// Sort by type priority and keep the top `max`
    ///
    /// The sort is stable: candidates of the same type keep the order their
    /// analyzer produced them in.
    pub fn rank(mut candidates: Vec<SuggestionCandidate>, max: usize) -> Vec<SuggestionCandidate> {
        candidates.sort_by_key(|c| Self::type_priority(c.suggestion_type));
        candidates.truncate(max);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate(suggestion_type: SuggestionType, content: &str) -> SuggestionCandidate {
        SuggestionCandidate::general(suggestion_type, content.to_string(), String::new(), json!({}))
    }

    #[test]
    fn test_type_priority_order() {
        let ordered = [
            SuggestionType::Reschedule,
            SuggestionType::PriorityChange,
            SuggestionType::DueDate,
            SuggestionType::Breakdown,
            SuggestionType::Recurring,
            SuggestionType::Context,
            SuggestionType::CategoryBalance,
            SuggestionType::TaskSuggestion,
        ];
        for pair in ordered.windows(2) {
            assert!(Scorer::type_priority(pair[0]) < Scorer::type_priority(pair[1]));
        }
    }

    #[test]
    fn test_rank_is_stable() {
        let ranked = Scorer::rank(
            vec![
                candidate(SuggestionType::CategoryBalance, "balance"),
                candidate(SuggestionType::Breakdown, "first"),
                candidate(SuggestionType::Reschedule, "reschedule"),
                candidate(SuggestionType::Breakdown, "second"),
            ],
            MAX_SUGGESTIONS,
        );

        let contents: Vec<&str> = ranked.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["reschedule", "first", "second", "balance"]);
    }

    #[test]
    fn test_rank_truncates() {
        let many = (0..20)
            .map(|i| candidate(SuggestionType::Context, &i.to_string()))
            .collect();
        let ranked = Scorer::rank(many, MAX_SUGGESTIONS);
        assert_eq!(ranked.len(), MAX_SUGGESTIONS);
        assert_eq!(ranked[0].content, "0");
        assert_eq!(ranked[14].content, "14");
    }
}
