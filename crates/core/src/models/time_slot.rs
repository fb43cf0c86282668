use serde::{Deserialize, Serialize};

/// A bookable session with its teacher(s), prerequisites, and skill level.
///
/// Constructed only by successful validation; all fields are already
/// whitespace-normalized. `prereqs` may be empty, the rest may not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workshop {
    pub name: String,
    pub teachers: String,
    pub prereqs: String,
    pub level: String,
}

/// What fills a time slot: a plain activity label ("Breakfast") or one or
/// more workshops running concurrently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotContent {
    Label(String),
    Workshops(Vec<Workshop>),
}

/// A single row of a day's schedule.
///
/// Serializes as the two-element `["10:00-11:00", content]` array used by
/// the schedule JSON, so the normalized output keeps the input's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot(pub String, pub SlotContent);

impl TimeSlot {
    /// The human-readable time range, e.g. "10:00-11:00".
    pub fn range(&self) -> &str {
        &self.0
    }

    pub fn content(&self) -> &SlotContent {
        &self.1
    }
}
