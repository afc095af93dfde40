//! Event repository

use sqlx::{SqliteExecutor, SqlitePool};

use crate::{
    error::AppResult,
    models::{Event, EventStatus, Grade, Sex},
};

/// Repository for event database operations
pub struct EventRepository;

impl EventRepository {
    /// Insert an event
    pub async fn create<'e, E>(executor: E, event: &Event) -> AppResult<()>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query(
            r#"
            INSERT INTO events (event_id, event, sex, grade, status)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&event.event_id)
        .bind(&event.name)
        .bind(event.sex)
        .bind(event.grade)
        .bind(event.status)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Find event by ID
    pub async fn find_by_id(pool: &SqlitePool, event_id: &str) -> AppResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(r#"SELECT * FROM events WHERE event_id = ?1"#)
            .bind(event_id)
            .fetch_optional(pool)
            .await?;

        Ok(event)
    }

    /// List events, each filter applied only when present
    pub async fn list(
        pool: &SqlitePool,
        sex: Option<Sex>,
        grade: Option<Grade>,
        status: Option<EventStatus>,
    ) -> AppResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT * FROM events
            WHERE
                (?1 IS NULL OR sex = ?1)
                AND (?2 IS NULL OR grade = ?2)
                AND (?3 IS NULL OR status = ?3)
            ORDER BY event_id
            "#,
        )
        .bind(sex)
        .bind(grade)
        .bind(status)
        .fetch_all(pool)
        .await?;

        Ok(events)
    }

    /// Distinct event names, in the order they were first scheduled
    pub async fn list_names(pool: &SqlitePool) -> AppResult<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(
            r#"SELECT event FROM events GROUP BY event ORDER BY MIN(event_id)"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(names)
    }

    /// Count events
    pub async fn count(pool: &SqlitePool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM events"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
