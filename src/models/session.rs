//! Login session model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Role;

/// Server-side session row. Only the SHA-256 of the cookie token is stored.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Session {
    #[serde(skip_serializing)]
    pub token_hash: String,
    pub username: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}
