//! Session repository

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::{error::AppResult, models::Session};

/// Repository for login session operations
pub struct SessionRepository;

impl SessionRepository {
    /// Store a new session
    pub async fn create(pool: &SqlitePool, session: &Session) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (token_hash, username, role, created_at, expires_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&session.token_hash)
        .bind(&session.username)
        .bind(session.role)
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Find session by token hash
    pub async fn find_by_token_hash(pool: &SqlitePool, token_hash: &str) -> AppResult<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(r#"SELECT * FROM sessions WHERE token_hash = ?1"#)
            .bind(token_hash)
            .fetch_optional(pool)
            .await?;

        Ok(session)
    }

    /// Delete a session
    pub async fn delete(pool: &SqlitePool, token_hash: &str) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM sessions WHERE token_hash = ?1"#)
            .bind(token_hash)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Delete every session that expired before `now`
    pub async fn delete_expired(pool: &SqlitePool, now: DateTime<Utc>) -> AppResult<u64> {
        let outcome = sqlx::query(r#"DELETE FROM sessions WHERE expires_at <= ?1"#)
            .bind(now)
            .execute(pool)
            .await?;

        Ok(outcome.rows_affected())
    }
}
