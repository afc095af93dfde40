//! Event model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::constants::TIME_BASED_MARKERS;

use super::{EventStatus, Grade, Sex};

/// Event database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    #[sqlx(rename = "event")]
    pub name: String,
    pub sex: Sex,
    pub grade: Grade,
    pub status: EventStatus,
}

impl Event {
    pub fn has_started(&self) -> bool {
        self.status != EventStatus::NotYetStart
    }

    /// "Boys A" style label
    pub fn category(&self) -> String {
        format!("{} {}", self.sex, self.grade)
    }
}

/// Detect a time-based event from its name
pub fn is_time_based(event_name: &str) -> bool {
    let lowered = event_name.to_lowercase();
    TIME_BASED_MARKERS.iter().any(|marker| lowered.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_time_based() {
        assert!(is_time_based("100 meters"));
        assert!(is_time_based("1500 Meters"));
        assert!(is_time_based("Cross Country Run"));
        assert!(!is_time_based("High Jump"));
        assert!(!is_time_based("Shot Put"));
    }
}
