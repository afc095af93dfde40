//! Result form and query DTOs

use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Grade, ResultStatus, Sex},
    services::{ResultFilters, ResultSubmission},
    utils::non_empty,
};

/// `/results` query string. Blank or unknown values mean no filter.
#[derive(Debug, Default, Deserialize)]
pub struct ResultsQuery {
    pub event: Option<String>,
    pub athlete: Option<String>,
    pub sex: Option<String>,
    pub grade: Option<String>,
    pub status: Option<String>,
}

impl ResultsQuery {
    pub fn filters(&self) -> ResultFilters<'_> {
        ResultFilters {
            event: non_empty(self.event.as_deref()),
            athlete: non_empty(self.athlete.as_deref()),
            sex: non_empty(self.sex.as_deref()).and_then(Sex::parse),
            grade: non_empty(self.grade.as_deref()).and_then(Grade::parse),
            status: non_empty(self.status.as_deref()).and_then(ResultStatus::parse),
        }
    }
}

/// Add-result form
#[derive(Debug, Deserialize)]
pub struct AddResultForm {
    #[serde(default)]
    pub athlete_id: String,
    #[serde(default)]
    pub event_id: String,
    pub result: Option<String>,
    pub status: Option<String>,
}

impl AddResultForm {
    pub fn submission(&self) -> AppResult<ResultSubmission<'_>> {
        Ok(ResultSubmission {
            athlete_id: self.athlete_id.trim(),
            event_id: self.event_id.trim(),
            result: self.result.as_deref(),
            status: parse_status(self.status.as_deref())?,
        })
    }
}

/// Edit-result form
#[derive(Debug, Deserialize)]
pub struct EditResultForm {
    pub result: Option<String>,
    pub status: Option<String>,
}

impl EditResultForm {
    pub fn status(&self) -> AppResult<ResultStatus> {
        parse_status(self.status.as_deref())
    }
}

/// A missing status means `Completed`
fn parse_status(raw: Option<&str>) -> AppResult<ResultStatus> {
    match non_empty(raw) {
        None => Ok(ResultStatus::Completed),
        Some(value) => ResultStatus::parse(value)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown result status '{value}'"))),
    }
}
