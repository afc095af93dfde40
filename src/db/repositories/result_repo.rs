//! Result repository

use sqlx::{SqliteExecutor, SqlitePool};

use crate::{
    error::AppResult,
    models::{EventResult, Grade, NewResult, ResultDetail, ResultRow, ResultStatus, Sex},
};

/// Repository for result database operations
pub struct ResultRepository;

impl ResultRepository {
    /// Insert a result, returning its new ID
    pub async fn create<'e, E>(executor: E, new: &NewResult) -> AppResult<i64>
    where
        E: SqliteExecutor<'e>,
    {
        let outcome = sqlx::query(
            r#"
            INSERT INTO results (athlete_id, event_id, result, status)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&new.athlete_id)
        .bind(&new.event_id)
        .bind(new.result)
        .bind(new.status)
        .execute(executor)
        .await?;

        Ok(outcome.last_insert_rowid())
    }

    /// Find result by ID
    pub async fn find_by_id(pool: &SqlitePool, result_id: i64) -> AppResult<Option<EventResult>> {
        let result = sqlx::query_as::<_, EventResult>(r#"SELECT * FROM results WHERE result_id = ?1"#)
            .bind(result_id)
            .fetch_optional(pool)
            .await?;

        Ok(result)
    }

    /// Find result with athlete and event names
    pub async fn find_detail(pool: &SqlitePool, result_id: i64) -> AppResult<Option<ResultDetail>> {
        let detail = sqlx::query_as::<_, ResultDetail>(
            r#"
            SELECT
                r.result_id,
                r.athlete_id,
                r.event_id,
                r.result,
                r.status,
                a.name AS athlete_name,
                e.event AS event_name,
                e.status AS event_status
            FROM results r
            JOIN athletes a ON a.athlete_id = r.athlete_id
            JOIN events e ON e.event_id = r.event_id
            WHERE r.result_id = ?1
            "#,
        )
        .bind(result_id)
        .fetch_optional(pool)
        .await?;

        Ok(detail)
    }

    /// Check whether the athlete already has a result in the event
    pub async fn exists_for(pool: &SqlitePool, athlete_id: &str, event_id: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM results WHERE athlete_id = ?1 AND event_id = ?2)"#,
        )
        .bind(athlete_id)
        .bind(event_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Update value and status, returning the number of rows touched
    pub async fn update(
        pool: &SqlitePool,
        result_id: i64,
        result: Option<f64>,
        status: ResultStatus,
    ) -> AppResult<u64> {
        let outcome = sqlx::query(r#"UPDATE results SET result = ?2, status = ?3 WHERE result_id = ?1"#)
            .bind(result_id)
            .bind(result)
            .bind(status)
            .execute(pool)
            .await?;

        Ok(outcome.rows_affected())
    }

    /// Delete a result, returning the number of rows removed
    pub async fn delete<'e, E>(executor: E, result_id: i64) -> AppResult<u64>
    where
        E: SqliteExecutor<'e>,
    {
        let outcome = sqlx::query(r#"DELETE FROM results WHERE result_id = ?1"#)
            .bind(result_id)
            .execute(executor)
            .await?;

        Ok(outcome.rows_affected())
    }

    /// Joined result rows for the listing, filtered by event name and category
    pub async fn list_rows(
        pool: &SqlitePool,
        event: Option<&str>,
        sex: Option<Sex>,
        grade: Option<Grade>,
    ) -> AppResult<Vec<ResultRow>> {
        let rows = sqlx::query_as::<_, ResultRow>(
            r#"
            SELECT
                r.result_id,
                r.result,
                r.status,
                a.athlete_id,
                a.name,
                a.house,
                a.sex AS athlete_sex,
                a.grade AS athlete_grade,
                e.event_id,
                e.event,
                e.sex AS event_sex,
                e.grade AS event_grade,
                e.status AS event_status
            FROM results r
            JOIN athletes a ON a.athlete_id = r.athlete_id
            JOIN events e ON e.event_id = r.event_id
            WHERE
                (?1 IS NULL OR e.event = ?1)
                AND (?2 IS NULL OR a.sex = ?2)
                AND (?3 IS NULL OR a.grade = ?3)
            ORDER BY e.event_id, r.result_id
            "#,
        )
        .bind(event)
        .bind(sex)
        .bind(grade)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Count results
    pub async fn count(pool: &SqlitePool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM results"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
