//! Athlete repository

use sqlx::{SqliteExecutor, SqlitePool};

use crate::{
    error::AppResult,
    models::{Athlete, Grade, Sex},
};

/// Repository for athlete database operations
pub struct AthleteRepository;

impl AthleteRepository {
    /// Insert an athlete
    pub async fn create<'e, E>(executor: E, athlete: &Athlete) -> AppResult<()>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query(
            r#"
            INSERT INTO athletes (athlete_id, name, house, sex, grade)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&athlete.athlete_id)
        .bind(&athlete.name)
        .bind(&athlete.house)
        .bind(athlete.sex)
        .bind(athlete.grade)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Find athlete by ID
    pub async fn find_by_id(pool: &SqlitePool, athlete_id: &str) -> AppResult<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(r#"SELECT * FROM athletes WHERE athlete_id = ?1"#)
            .bind(athlete_id)
            .fetch_optional(pool)
            .await?;

        Ok(athlete)
    }

    /// List athletes, each filter applied only when present
    pub async fn list(
        pool: &SqlitePool,
        house: Option<&str>,
        sex: Option<Sex>,
        grade: Option<Grade>,
    ) -> AppResult<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT * FROM athletes
            WHERE
                (?1 IS NULL OR house = ?1)
                AND (?2 IS NULL OR sex = ?2)
                AND (?3 IS NULL OR grade = ?3)
            ORDER BY athlete_id
            "#,
        )
        .bind(house)
        .bind(sex)
        .bind(grade)
        .fetch_all(pool)
        .await?;

        Ok(athletes)
    }

    /// Houses that have at least one athlete
    pub async fn list_houses(pool: &SqlitePool) -> AppResult<Vec<String>> {
        let houses: Vec<String> =
            sqlx::query_scalar(r#"SELECT DISTINCT house FROM athletes ORDER BY house"#)
                .fetch_all(pool)
                .await?;

        Ok(houses)
    }

    /// Count athletes
    pub async fn count(pool: &SqlitePool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM athletes"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
