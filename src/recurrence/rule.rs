/// Recurrence rules and their persisted string form
///
/// Rules are stored next to a task as compact JSON, e.g.
/// `{"frequency":"weekly","daysOfWeek":[1,3,5]}`.

use crate::calendar::weekday_from_sunday_index;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// How often a task repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// A repeat rule.
///
/// `days_of_week` uses 0 = Sunday .. 6 = Saturday and only matters for
/// weekly rules. Empty means "same weekday as the anchor".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    #[serde(
        default,
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "nullable_days"
    )]
    pub days_of_week: BTreeSet<u8>,
}

impl RecurrenceRule {
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            days_of_week: BTreeSet::new(),
        }
    }

    pub fn daily() -> Self {
        Self::new(Frequency::Daily)
    }

    pub fn weekly() -> Self {
        Self::new(Frequency::Weekly)
    }

    /// Weekly on specific days (0 = Sunday)
    pub fn weekly_on(days: impl IntoIterator<Item = u8>) -> Self {
        Self {
            frequency: Frequency::Weekly,
            days_of_week: days.into_iter().collect(),
        }
    }

    pub fn monthly() -> Self {
        Self::new(Frequency::Monthly)
    }

    pub fn yearly() -> Self {
        Self::new(Frequency::Yearly)
    }

    /// All weekday indexes are in 0..=6
    pub fn is_valid(&self) -> bool {
        self.days_of_week.iter().all(|d| *d <= 6)
    }

    /// Human-readable form, e.g. "every week on Mon, Wed, Fri"
    pub fn describe(&self) -> String {
        match self.frequency {
            Frequency::Daily => "every day".to_string(),
            Frequency::Weekly if self.days_of_week.is_empty() => "every week".to_string(),
            Frequency::Weekly => {
                let days: Vec<String> = self
                    .days_of_week
                    .iter()
                    .filter_map(|d| weekday_from_sunday_index(*d))
                    .map(|w| w.to_string())
                    .collect();
                format!("every week on {}", days.join(", "))
            }
            Frequency::Monthly => "every month".to_string(),
            Frequency::Yearly => "every year".to_string(),
        }
    }
}

impl std::fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

fn nullable_days<'de, D>(deserializer: D) -> Result<BTreeSet<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeSet<u8>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Encode a rule for storage
pub fn serialize_rule(rule: &RecurrenceRule) -> String {
    // A struct of an enum and a set of u8 cannot fail to serialize
    serde_json::to_string(rule).unwrap_or_default()
}

/// Decode a stored rule.
///
/// Anything that is not a well-formed rule gives `None`, which callers read
/// as "does not repeat".
pub fn parse_rule(text: &str) -> Option<RecurrenceRule> {
    match serde_json::from_str::<RecurrenceRule>(text) {
        Ok(rule) if rule.is_valid() => Some(rule),
        Ok(rule) => {
            debug!("recurrence rule has out-of-range weekdays: {:?}", rule.days_of_week);
            None
        }
        Err(e) => {
            debug!("ignoring malformed recurrence rule: {}", e);
            None
        }
    }
}
