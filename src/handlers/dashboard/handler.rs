//! Dashboard handler

use askama::Template;
use axum::{extract::State, response::Html};

use crate::{error::AppResult, handlers::page::PageContext, services::RosterService, state::AppState};

use super::response::IndexTemplate;

/// Welcome page with roster totals
pub async fn index(State(state): State<AppState>, page: PageContext) -> AppResult<Html<String>> {
    let template = IndexTemplate {
        page,
        totals: RosterService::totals(state.db()).await?,
    };

    Ok(Html(template.render()?))
}
