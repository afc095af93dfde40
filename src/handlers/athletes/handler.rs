//! Athlete handler implementations

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::{
    error::AppResult,
    handlers::page::{PageContext, select_options},
    models::{Grade, Sex},
    services::RosterService,
    state::AppState,
    utils::non_empty,
};

use super::{request::AthletesQuery, response::ListAthletesTemplate};

/// Athlete list filtered by house, sex and grade
pub async fn list_athletes(
    State(state): State<AppState>,
    page: PageContext,
    Query(query): Query<AthletesQuery>,
) -> AppResult<Html<String>> {
    let house = non_empty(query.house.as_deref());
    let sex = non_empty(query.sex.as_deref()).and_then(Sex::parse);
    let grade = non_empty(query.grade.as_deref()).and_then(Grade::parse);

    let (athletes, houses) = RosterService::list_athletes(state.db(), house, sex, grade).await?;

    let template = ListAthletesTemplate {
        page,
        athletes,
        house_options: select_options(&houses, house),
        sex_options: select_options(Sex::ALL.map(|s| s.as_str()), sex.map(|s| s.as_str())),
        grade_options: select_options(Grade::ALL.map(|g| g.as_str()), grade.map(|g| g.as_str())),
    };

    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use tower::ServiceExt;

    use crate::{
        models::Role,
        test_utils::test_app::{body_text, create_test_app, get, session_cookie},
    };

    #[tokio::test]
    async fn test_list_athletes_by_sex() {
        let (app, state) = create_test_app().await;
        let cookie = session_cookie(&state, "admin", Role::Admin).await;

        let response = app.oneshot(get("/athletes?sex=Girls&house=", Some(&cookie))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("ATH005"));
        assert!(!body.contains("ATH001"));
        assert!(body.contains("<option value=\"Girls\" selected>"));
    }
}
