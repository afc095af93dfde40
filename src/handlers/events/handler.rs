//! Event handler implementations

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::{
    error::AppResult,
    handlers::page::{PageContext, select_options},
    models::{EventStatus, Grade, Sex},
    services::RosterService,
    state::AppState,
    utils::non_empty,
};

use super::{request::EventsQuery, response::ListEventsTemplate};

/// Event list filtered by sex, grade and status
pub async fn list_events(
    State(state): State<AppState>,
    page: PageContext,
    Query(query): Query<EventsQuery>,
) -> AppResult<Html<String>> {
    let sex = non_empty(query.sex.as_deref()).and_then(Sex::parse);
    let grade = non_empty(query.grade.as_deref()).and_then(Grade::parse);
    let status = non_empty(query.status.as_deref()).and_then(EventStatus::parse);

    let events = RosterService::list_events(state.db(), sex, grade, status).await?;

    let template = ListEventsTemplate {
        page,
        events,
        sex_options: select_options(Sex::ALL.map(|s| s.as_str()), sex.map(|s| s.as_str())),
        grade_options: select_options(Grade::ALL.map(|g| g.as_str()), grade.map(|g| g.as_str())),
        status_options: select_options(EventStatus::ALL.map(|s| s.as_str()), status.map(|s| s.as_str())),
    };

    Ok(Html(template.render()?))
}
