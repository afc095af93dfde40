//! User repository

use sqlx::{SqliteExecutor, SqlitePool};

use crate::{
    error::AppResult,
    models::{Role, User},
};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create<'e, E>(
        executor: E,
        username: &str,
        password_hash: &str,
        role: Role,
    ) -> AppResult<()>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query(r#"INSERT INTO users (username, password_hash, role) VALUES (?1, ?2, ?3)"#)
            .bind(username)
            .bind(password_hash)
            .bind(role)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Find user by username
    pub async fn find_by_username(pool: &SqlitePool, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE username = ?1"#)
            .bind(username)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Count registered users
    pub async fn count(pool: &SqlitePool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM users"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
