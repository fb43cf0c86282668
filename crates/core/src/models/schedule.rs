use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::time_slot::TimeSlot;

/// The nine day-keys of the event, in running order: December 27th through
/// January 4th. Keys are two-character and zero-padded, matching the
/// schedule JSON.
pub const DAY_KEYS: [&str; 9] = ["27", "28", "29", "30", "31", "01", "02", "03", "04"];

/// One day of the event: a non-empty ordered list of time slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub times: Vec<TimeSlot>,
}

/// The full validated schedule, keyed by day.
///
/// The map holds exactly the keys in [`DAY_KEYS`]; use [`Self::days`] to walk
/// them in event order rather than the map's lexical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub data: BTreeMap<String, DaySchedule>,
}

impl ScheduleResponse {
    /// Iterates day schedules in event order, the 27th first and the 4th
    /// last.
    pub fn days(&self) -> impl Iterator<Item = (&'static str, &DaySchedule)> {
        DAY_KEYS
            .into_iter()
            .filter_map(|key| self.data.get(key).map(|day| (key, day)))
    }
}
