//! Roster service: athletes, events and dashboard totals

use sqlx::SqlitePool;

use crate::{
    db::repositories::{AthleteRepository, EventRepository, ResultRepository},
    error::AppResult,
    models::{Athlete, Event, EventStatus, Grade, Sex},
};

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterTotals {
    pub athletes: i64,
    pub events: i64,
    pub results: i64,
}

/// Roster service for business logic
pub struct RosterService;

impl RosterService {
    /// Athletes matching the given filters, plus every known house
    pub async fn list_athletes(
        pool: &SqlitePool,
        house: Option<&str>,
        sex: Option<Sex>,
        grade: Option<Grade>,
    ) -> AppResult<(Vec<Athlete>, Vec<String>)> {
        let athletes = AthleteRepository::list(pool, house, sex, grade).await?;
        let houses = AthleteRepository::list_houses(pool).await?;

        Ok((athletes, houses))
    }

    /// Events matching the given filters
    pub async fn list_events(
        pool: &SqlitePool,
        sex: Option<Sex>,
        grade: Option<Grade>,
        status: Option<EventStatus>,
    ) -> AppResult<Vec<Event>> {
        EventRepository::list(pool, sex, grade, status).await
    }

    /// Distinct event names for the results filter
    pub async fn event_names(pool: &SqlitePool) -> AppResult<Vec<String>> {
        EventRepository::list_names(pool).await
    }

    pub async fn totals(pool: &SqlitePool) -> AppResult<RosterTotals> {
        Ok(RosterTotals {
            athletes: AthleteRepository::count(pool).await?,
            events: EventRepository::count(pool).await?,
            results: ResultRepository::count(pool).await?,
        })
    }
}
