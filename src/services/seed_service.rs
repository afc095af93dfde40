//! First-run database seeding

use sqlx::SqlitePool;

use crate::{
    config::SeedConfig,
    constants::roles,
    db::repositories::{AthleteRepository, EventRepository, ResultRepository, UserRepository},
    error::AppResult,
    models::Role,
    seed::{self, SampleData},
    services::AuthService,
};

/// What a seeding run wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub athletes: usize,
    pub events: usize,
    pub results: usize,
}

/// Seeding service
pub struct SeedService;

impl SeedService {
    /// Seed an empty database. Does nothing once any user exists.
    pub async fn seed_if_empty(pool: &SqlitePool, config: &SeedConfig) -> AppResult<Option<SeedSummary>> {
        if UserRepository::count(pool).await? > 0 {
            tracing::debug!("Database already initialized, skipping seed");
            return Ok(None);
        }

        let data = if config.sample_data {
            seed::sample(&mut rand::rng(), config.athlete_count)
        } else {
            SampleData {
                athletes: Vec::new(),
                events: Vec::new(),
                results: Vec::new(),
            }
        };

        let summary = Self::seed(pool, config, &data).await?;
        tracing::info!(
            users = summary.users,
            athletes = summary.athletes,
            events = summary.events,
            results = summary.results,
            "Seeded database"
        );

        Ok(Some(summary))
    }

    /// Write default accounts and the given fixtures in one transaction
    pub async fn seed(pool: &SqlitePool, config: &SeedConfig, data: &SampleData) -> AppResult<SeedSummary> {
        let accounts = [
            (roles::ADMIN, AuthService::hash_password(&config.admin_password)?, Role::Admin),
            (roles::USER, AuthService::hash_password(&config.user_password)?, Role::User),
        ];

        let mut tx = pool.begin().await?;

        for (username, password_hash, role) in &accounts {
            UserRepository::create(&mut *tx, username, password_hash, *role).await?;
        }
        for athlete in &data.athletes {
            AthleteRepository::create(&mut *tx, athlete).await?;
        }
        for event in &data.events {
            EventRepository::create(&mut *tx, event).await?;
        }
        for result in &data.results {
            ResultRepository::create(&mut *tx, result).await?;
        }

        tx.commit().await?;

        Ok(SeedSummary {
            users: accounts.len(),
            athletes: data.athletes.len(),
            events: data.events.len(),
            results: data.results.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db, test_utils::test_app::test_config};

    #[tokio::test]
    async fn test_seed_if_empty_runs_once() {
        let pool = db::create_memory_pool().await.unwrap();
        db::run_migrations(&pool).await.unwrap();
        let mut config = test_config().seed;
        config.athlete_count = 30;

        let summary = SeedService::seed_if_empty(&pool, &config).await.unwrap().unwrap();
        assert_eq!(summary.users, 2);
        assert_eq!(summary.athletes, 30);
        assert_eq!(summary.events, 56);

        assert_eq!(AthleteRepository::count(&pool).await.unwrap(), 30);
        assert_eq!(ResultRepository::count(&pool).await.unwrap(), summary.results as i64);

        assert!(SeedService::seed_if_empty(&pool, &config).await.unwrap().is_none());
        assert_eq!(AthleteRepository::count(&pool).await.unwrap(), 30);
    }

    #[tokio::test]
    async fn test_seed_without_sample_data_creates_accounts_only() {
        let pool = db::create_memory_pool().await.unwrap();
        db::run_migrations(&pool).await.unwrap();
        let mut config = test_config().seed;
        config.sample_data = false;

        let summary = SeedService::seed_if_empty(&pool, &config).await.unwrap().unwrap();

        assert_eq!(summary, SeedSummary { users: 2, ..SeedSummary::default() });
        let admin = UserRepository::find_by_username(&pool, "admin").await.unwrap().unwrap();
        assert!(admin.is_admin());
        assert!(AuthService::verify_password(&config.admin_password, &admin.password_hash).unwrap());
    }
}
