//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use sqlx::SqlitePool;

use crate::{
    config::Config,
    constants::SESSION_TOKEN_LENGTH,
    db::repositories::{SessionRepository, UserRepository},
    error::{AppError, AppResult},
    models::{Session, User},
    utils::{generate_secure_token, hash_string},
};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Check credentials and open a session.
    ///
    /// Returns the user and the raw session token for the cookie. Only the
    /// token's hash is persisted.
    pub async fn login(
        pool: &SqlitePool,
        config: &Config,
        username: &str,
        password: &str,
    ) -> AppResult<(User, String)> {
        let username = username.trim();

        let Some(user) = UserRepository::find_by_username(pool, username).await? else {
            tracing::warn!(username = %username, "Login failed: unknown user");
            return Err(AppError::InvalidCredentials);
        };

        if !Self::verify_password(password, &user.password_hash)? {
            tracing::warn!(username = %username, "Login failed: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let now = Utc::now();
        let purged = SessionRepository::delete_expired(pool, now).await?;
        if purged > 0 {
            tracing::debug!(purged, "Removed expired sessions");
        }

        let token = generate_secure_token(SESSION_TOKEN_LENGTH);
        let session = Session {
            token_hash: hash_string(&token),
            username: user.username.clone(),
            role: user.role,
            created_at: now,
            expires_at: now + Duration::hours(config.session.expiry_hours),
        };
        SessionRepository::create(pool, &session).await?;

        tracing::info!(username = %user.username, role = %user.role, "User logged in");

        Ok((user, token))
    }

    /// Close the session behind a cookie token
    pub async fn logout(pool: &SqlitePool, token: &str) -> AppResult<()> {
        SessionRepository::delete(pool, &hash_string(token)).await
    }

    /// Look up a live session. Expired sessions are removed on sight.
    pub async fn resolve_session(pool: &SqlitePool, token: &str) -> AppResult<Option<Session>> {
        let token_hash = hash_string(token);

        let Some(session) = SessionRepository::find_by_token_hash(pool, &token_hash).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            tracing::debug!(username = %session.username, "Session expired");
            SessionRepository::delete(pool, &token_hash).await?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// Hash password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
