/// Result of parsing one quick-capture line

use crate::model::Priority;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Fields pulled out of a capture line.
///
/// `title` is what is left of `raw_input` once every recognized token is
/// removed. It may be empty (input was only tokens); what to store as the
/// task title in that case is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCapture {
    pub title: String,
    pub raw_input: String,
    pub priority: Option<Priority>,
    pub categories: Vec<String>,
    pub contexts: Vec<String>,
    pub due_date: Option<NaiveDate>,
    #[serde(default, with = "hhmm")]
    pub due_time: Option<NaiveTime>,
}

impl ParsedCapture {
    /// Capture that recognized nothing
    #[cfg(test)]
    pub fn unparsed(raw_input: &str) -> Self {
        Self {
            title: raw_input.trim().to_string(),
            raw_input: raw_input.to_string(),
            priority: None,
            categories: Vec::new(),
            contexts: Vec::new(),
            due_date: None,
            due_time: None,
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// True when any field other than the title was filled in
    pub fn has_signals(&self) -> bool {
        self.priority.is_some()
            || !self.categories.is_empty()
            || !self.contexts.is_empty()
            || self.due_date.is_some()
            || self.due_time.is_some()
    }

    /// Due time as zero-padded `HH:MM`
    pub fn due_time_label(&self) -> Option<String> {
        self.due_time.map(|t| t.format("%H:%M").to_string())
    }
}

/// `Option<NaiveTime>` as `"HH:MM"`
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| NaiveTime::parse_from_str(&s, "%H:%M").map_err(serde::de::Error::custom))
            .transpose()
    }
}
