//! Athlete model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Event, Grade, Sex};

/// Athlete database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Athlete {
    pub athlete_id: String,
    pub name: String,
    pub house: String,
    pub sex: Sex,
    pub grade: Grade,
}

impl Athlete {
    /// An athlete may only be entered in events of their own sex and grade
    pub fn can_enter(&self, event: &Event) -> bool {
        self.sex == event.sex && self.grade == event.grade
    }
}
