//! Test utilities
//!
//! Every helper builds its own private in-memory database, so tests never
//! share state.

#[cfg(test)]
pub mod test_app {
    use std::sync::LazyLock;

    use axum::{
        Router,
        body::Body,
        http::{Request, Response, header},
    };
    use chrono::{Duration, Utc};
    use sqlx::SqlitePool;

    use crate::{
        config::{Config, DatabaseConfig, SeedConfig, ServerConfig, SessionConfig},
        constants::{FLASH_COOKIE_NAME, SESSION_COOKIE_NAME},
        db::{self, repositories::{SessionRepository, UserRepository}},
        middleware::FlashMessage,
        models::{Role, Session},
        services::AuthService,
        state::AppState,
        utils::hash_string,
    };

    /// Argon2 hashes of the default passwords, computed once per test binary
    static PASSWORD_HASHES: LazyLock<(String, String)> = LazyLock::new(|| {
        (
            AuthService::hash_password("adminpass").expect("hash admin password"),
            AuthService::hash_password("userpass").expect("hash user password"),
        )
    });

    const FIXTURE_SQL: &str = r#"
        INSERT INTO athletes (athlete_id, name, house, sex, grade) VALUES
            ('ATH001', 'Alex Chan', 'Red', 'Boys', 'A'),
            ('ATH002', 'Sam Wong', 'Blue', 'Boys', 'A'),
            ('ATH003', 'Riley Patel', 'Red', 'Boys', 'A'),
            ('ATH004', 'Quinn Lee', 'Blue', 'Boys', 'A'),
            ('ATH005', 'Avery Kim', 'Red', 'Girls', 'B');

        INSERT INTO events (event_id, event, sex, grade, status) VALUES
            ('EV0001', '100 meters', 'Boys', 'A', 'Completed'),
            ('EV0002', 'Long Jump', 'Boys', 'A', 'Completed'),
            ('EV0003', '100 meters', 'Boys', 'B', 'Completed'),
            ('EV0004', 'High Jump', 'Boys', 'A', 'Not yet start'),
            ('EV0005', 'Shot Put', 'Girls', 'B', 'Completed');

        INSERT INTO results (result_id, athlete_id, event_id, result, status) VALUES
            (1, 'ATH001', 'EV0001', 12.34, 'Completed'),
            (2, 'ATH002', 'EV0001', 12.34, 'Completed'),
            (3, 'ATH003', 'EV0001', 12.80, 'Completed'),
            (4, 'ATH001', 'EV0002', 4.50, 'Completed'),
            (5, 'ATH002', 'EV0002', NULL, 'Disqualification'),
            (6, 'ATH005', 'EV0005', 7.20, 'Completed');
    "#;

    pub fn test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            session: SessionConfig {
                expiry_hours: 1,
                cookie_secure: false,
            },
            seed: SeedConfig {
                sample_data: true,
                athlete_count: 12,
                admin_password: "adminpass".to_string(),
                user_password: "userpass".to_string(),
            },
        }
    }

    /// Migrated database holding only the two default accounts
    pub async fn seeded_pool() -> (SqlitePool, Config) {
        let pool = db::create_memory_pool()
            .await
            .expect("Failed to open in-memory database");
        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let (admin_hash, user_hash) = &*PASSWORD_HASHES;
        for (username, hash, role) in [
            ("admin", admin_hash, Role::Admin),
            ("user", user_hash, Role::User),
        ] {
            UserRepository::create(&pool, username, hash, role)
                .await
                .expect("Failed to create account");
        }

        (pool, test_config())
    }

    /// Accounts plus a small fixed roster:
    ///
    /// * EV0001 `100 meters` Boys A: ATH001 and ATH002 tie on 12.34, ATH003 12.80
    /// * EV0002 `Long Jump` Boys A: ATH001 4.50, ATH002 disqualified
    /// * EV0003 `100 meters` Boys B: no results
    /// * EV0004 `High Jump` Boys A: not yet started
    /// * EV0005 `Shot Put` Girls B: ATH005 7.20
    pub async fn fixture_pool() -> SqlitePool {
        let (pool, _) = seeded_pool().await;
        sqlx::raw_sql(FIXTURE_SQL)
            .execute(&pool)
            .await
            .expect("Failed to load fixtures");
        pool
    }

    /// Application router over the fixture database
    pub async fn create_test_app() -> (Router, AppState) {
        let state = AppState::new(fixture_pool().await, test_config());
        let app = crate::create_router(state.clone());
        (app, state)
    }

    /// `Cookie` header value of a fresh session for `username`
    pub async fn session_cookie(state: &AppState, username: &str, role: Role) -> String {
        let token = format!("test-token-{username}");
        let now = Utc::now();
        SessionRepository::create(
            state.db(),
            &Session {
                token_hash: hash_string(&token),
                username: username.to_string(),
                role,
                created_at: now,
                expires_at: now + Duration::hours(1),
            },
        )
        .await
        .expect("Failed to create session");

        format!("{SESSION_COOKIE_NAME}={token}")
    }

    pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    pub fn post_form(uri: &str, cookie: Option<&str>, form: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(form.to_string())).unwrap()
    }

    pub async fn body_text(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    pub fn location(response: &Response<Body>) -> Option<&str> {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// All `Set-Cookie` header values
    pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok().map(str::to_string))
            .collect()
    }

    /// Flash message set by the response, if any
    pub fn flash(response: &Response<Body>) -> Option<FlashMessage> {
        let prefix = format!("{FLASH_COOKIE_NAME}=");
        set_cookies(response).iter().find_map(|cookie| {
            let value = cookie.strip_prefix(&prefix)?.split(';').next()?;
            FlashMessage::decode(value)
        })
    }
}
