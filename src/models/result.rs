//! Result models
//!
//! `EventResult` mirrors the `results` table. `ResultRow` is the joined
//! shape used by the listing and the ranking routine.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{EventStatus, Grade, ResultStatus, Sex};

/// Result database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct EventResult {
    pub result_id: i64,
    pub athlete_id: String,
    pub event_id: String,
    pub result: Option<f64>,
    pub status: ResultStatus,
}

/// Result joined with its athlete and event
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ResultRow {
    pub result_id: i64,
    pub result: Option<f64>,
    pub status: ResultStatus,
    pub athlete_id: String,
    pub name: String,
    pub house: String,
    pub athlete_sex: Sex,
    pub athlete_grade: Grade,
    pub event_id: String,
    pub event: String,
    pub event_sex: Sex,
    pub event_grade: Grade,
    pub event_status: EventStatus,
}

/// A single result with the names needed by the edit screen
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ResultDetail {
    pub result_id: i64,
    pub athlete_id: String,
    pub event_id: String,
    pub result: Option<f64>,
    pub status: ResultStatus,
    pub athlete_name: String,
    pub event_name: String,
    pub event_status: EventStatus,
}

/// New result ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewResult {
    pub athlete_id: String,
    pub event_id: String,
    pub result: Option<f64>,
    pub status: ResultStatus,
}
