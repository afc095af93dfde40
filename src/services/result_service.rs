//! Result service
//!
//! Admission and edit rules for results, deletion, and the ranked listing.

use sqlx::SqlitePool;

use crate::{
    db::repositories::{AthleteRepository, EventRepository, ResultRepository},
    error::{AppError, AppResult},
    models::{EventStatus, Grade, NewResult, ResultDetail, ResultStatus, Sex},
    ranking::{self, EventStanding},
    utils::{parse_result_value, validation::ResultValueError},
};

/// A result as submitted on the add form
#[derive(Debug, Clone)]
pub struct ResultSubmission<'a> {
    pub athlete_id: &'a str,
    pub event_id: &'a str,
    pub result: Option<&'a str>,
    pub status: ResultStatus,
}

/// Filters of the results listing
#[derive(Debug, Clone, Default)]
pub struct ResultFilters<'a> {
    pub event: Option<&'a str>,
    pub athlete: Option<&'a str>,
    pub sex: Option<Sex>,
    pub grade: Option<Grade>,
    pub status: Option<ResultStatus>,
}

/// Result service for business logic
pub struct ResultService;

impl ResultService {
    /// Validate and store a new result, returning its ID
    pub async fn add_result(pool: &SqlitePool, submission: ResultSubmission<'_>) -> AppResult<i64> {
        let value = Self::checked_value(submission.result, submission.status)?;

        let athlete = AthleteRepository::find_by_id(pool, submission.athlete_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Athlete ID not found".to_string()))?;

        let event = EventRepository::find_by_id(pool, submission.event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event ID not found".to_string()))?;

        if !athlete.can_enter(&event) {
            return Err(AppError::Validation(
                "Sex/grade mismatch between athlete & event".to_string(),
            ));
        }

        if !event.has_started() {
            return Err(AppError::Validation("Event has not started yet".to_string()));
        }

        if ResultRepository::exists_for(pool, &athlete.athlete_id, &event.event_id).await? {
            return Err(Self::duplicate());
        }

        let new = NewResult {
            athlete_id: athlete.athlete_id,
            event_id: event.event_id,
            result: value,
            status: submission.status,
        };

        let result_id = ResultRepository::create(pool, &new).await.map_err(|e| match e {
            AppError::AlreadyExists(_) => Self::duplicate(),
            other => other,
        })?;

        tracing::info!(
            result_id,
            athlete_id = %new.athlete_id,
            event_id = %new.event_id,
            status = %new.status,
            "Result added"
        );

        Ok(result_id)
    }

    /// Load a result for the edit screen
    pub async fn get_result(pool: &SqlitePool, result_id: i64) -> AppResult<ResultDetail> {
        ResultRepository::find_detail(pool, result_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Result not found".to_string()))
    }

    /// Change the value and status of an existing result
    pub async fn update_result(
        pool: &SqlitePool,
        result_id: i64,
        raw_value: Option<&str>,
        status: ResultStatus,
    ) -> AppResult<()> {
        let detail = Self::get_result(pool, result_id).await?;
        let value = Self::checked_value(raw_value, status)?;

        if detail.event_status == EventStatus::NotYetStart && status != ResultStatus::NotYetStart {
            return Err(AppError::Validation("Event has not started yet".to_string()));
        }

        let updated = ResultRepository::update(pool, result_id, value, status).await?;
        if updated == 0 {
            return Err(AppError::NotFound("Result not found".to_string()));
        }

        tracing::info!(result_id, status = %status, "Result updated");
        Ok(())
    }

    /// Delete a result. Returns `false` when there was nothing to delete.
    pub async fn delete_result(pool: &SqlitePool, result_id: i64) -> AppResult<bool> {
        let mut tx = pool.begin().await?;

        match ResultRepository::delete(&mut *tx, result_id).await {
            Ok(removed) => {
                tx.commit().await?;
                tracing::info!(result_id, removed, "Result delete processed");
                Ok(removed > 0)
            }
            Err(e) => {
                tx.rollback().await?;
                tracing::warn!(result_id, error = %e, "Result delete rolled back");
                Err(e)
            }
        }
    }

    /// Ranked standings for the listing.
    ///
    /// Event, sex and grade narrow the query. Athlete and status are applied
    /// after ranking so ranks always reflect the whole event.
    pub async fn list_standings(
        pool: &SqlitePool,
        filters: &ResultFilters<'_>,
    ) -> AppResult<Vec<EventStanding>> {
        let rows = ResultRepository::list_rows(pool, filters.event, filters.sex, filters.grade).await?;
        let standings = ranking::rank_results(rows);

        if filters.athlete.is_none() && filters.status.is_none() {
            return Ok(standings);
        }

        Ok(ranking::retain_entries(standings, |entry| {
            filters.athlete.is_none_or(|id| entry.row.athlete_id == id)
                && filters.status.is_none_or(|status| entry.row.status == status)
        }))
    }

    /// Parse a submitted value. Completed results need one, unstarted
    /// entries never keep one.
    fn checked_value(raw: Option<&str>, status: ResultStatus) -> AppResult<Option<f64>> {
        let value = parse_result_value(raw).map_err(|e: ResultValueError| AppError::Validation(e.to_string()))?;

        match status {
            ResultStatus::Completed if value.is_none() => {
                Err(AppError::Validation(ResultValueError::NotANumber.to_string()))
            }
            ResultStatus::NotYetStart => Ok(None),
            _ => Ok(value),
        }
    }

    fn duplicate() -> AppError {
        AppError::AlreadyExists("A result for this athlete and event already exists".to_string())
    }
}
