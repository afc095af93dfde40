//! Result handler implementations
//!
//! Rule violations on the add and edit forms come back as flash messages
//! on a redirect; only unexpected failures surface as error pages.

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
};
use tracing::{info, warn};

use crate::{
    error::{AppError, AppResult},
    handlers::page::{PageContext, SelectOption, select_options},
    middleware::{CurrentUser, FlashMessage, redirect_with_flash},
    models::{Grade, ResultStatus, Sex},
    services::{ResultService, RosterService},
    state::AppState,
};

use super::{
    request::{AddResultForm, EditResultForm, ResultsQuery},
    response::{AddResultTemplate, EditResultTemplate, ListResultsTemplate, StandingView},
};

/// Ranked results, one table per event
pub async fn list_results(
    State(state): State<AppState>,
    page: PageContext,
    Query(query): Query<ResultsQuery>,
) -> AppResult<Html<String>> {
    let filters = query.filters();

    let standings = ResultService::list_standings(state.db(), &filters).await?;
    let event_names = RosterService::event_names(state.db()).await?;

    let template = ListResultsTemplate {
        page,
        entry_count: standings.iter().map(|s| s.entries.len()).sum(),
        standings: standings.into_iter().map(StandingView::from).collect(),
        event_options: select_options(&event_names, filters.event),
        sex_options: select_options(Sex::ALL.map(|s| s.as_str()), filters.sex.map(|s| s.as_str())),
        grade_options: select_options(Grade::ALL.map(|g| g.as_str()), filters.grade.map(|g| g.as_str())),
        status_options: status_options(filters.status),
        athlete: filters.athlete.unwrap_or_default().to_string(),
    };

    Ok(Html(template.render()?))
}

/// Blank add-result form
pub async fn add_result_page(page: PageContext) -> AppResult<Html<String>> {
    let template = AddResultTemplate {
        page,
        status_options: status_options(Some(ResultStatus::Completed)),
    };

    Ok(Html(template.render()?))
}

/// Apply the admission rule to a submitted result
pub async fn add_result(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(form): Form<AddResultForm>,
) -> AppResult<Response> {
    let outcome = match form.submission() {
        Ok(submission) => ResultService::add_result(state.db(), submission).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(result_id) => {
            info!(result_id, username = %user.username, "Result recorded");
            Ok(redirect_with_flash("/results", FlashMessage::success("Result added")))
        }
        Err(e) if e.is_user_facing() => Ok(redirect_with_flash("/add", FlashMessage::error(e.to_string()))),
        Err(e) => Err(e),
    }
}

/// Edit form for one result
pub async fn edit_result_page(
    State(state): State<AppState>,
    page: PageContext,
    Path(result_id): Path<i64>,
) -> AppResult<Response> {
    let detail = match ResultService::get_result(state.db(), result_id).await {
        Ok(detail) => detail,
        Err(AppError::NotFound(message)) => {
            return Ok(redirect_with_flash("/results", FlashMessage::error(message)));
        }
        Err(e) => return Err(e),
    };

    let options = status_options(Some(detail.status));
    let template = EditResultTemplate::new(page, detail, options);

    Ok(Html(template.render()?).into_response())
}

/// Change a result's value and status
pub async fn edit_result(
    State(state): State<AppState>,
    Path(result_id): Path<i64>,
    Form(form): Form<EditResultForm>,
) -> AppResult<Response> {
    let outcome = match form.status() {
        Ok(status) => ResultService::update_result(state.db(), result_id, form.result.as_deref(), status).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => Ok(redirect_with_flash(
            "/results",
            FlashMessage::success("Result updated successfully"),
        )),
        Err(AppError::NotFound(message)) => Ok(redirect_with_flash("/results", FlashMessage::error(message))),
        Err(e) if e.is_user_facing() => Ok(redirect_with_flash(
            &format!("/results/edit/{result_id}"),
            FlashMessage::error(e.to_string()),
        )),
        Err(e) => Err(e),
    }
}

/// Delete a result. Missing IDs are not an error.
pub async fn delete_result(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(result_id): Path<i64>,
) -> Response {
    let flash = match ResultService::delete_result(state.db(), result_id).await {
        Ok(true) => {
            info!(result_id, username = %user.username, "Result deleted");
            FlashMessage::success("Result deleted successfully")
        }
        Ok(false) => FlashMessage::info("Result not found"),
        Err(e) => {
            warn!(result_id, error = %e, "Delete failed");
            FlashMessage::error(format!("Error deleting result: {e}"))
        }
    };

    redirect_with_flash("/results", flash)
}

fn status_options(current: Option<ResultStatus>) -> Vec<SelectOption> {
    select_options(ResultStatus::ALL.map(|s| s.as_str()), current.map(|s| s.as_str()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use tower::ServiceExt;

    use crate::{
        db::repositories::ResultRepository,
        models::Role,
        test_utils::test_app::{body_text, create_test_app, flash, get, location, post_form, session_cookie},
    };

    use super::*;

    #[tokio::test]
    async fn test_results_require_login() {
        let (app, _) = create_test_app().await;

        let response = app.oneshot(get("/results", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), Some("/login"));
    }

    #[tokio::test]
    async fn test_results_listing_shows_shared_rank() {
        let (app, state) = create_test_app().await;
        let cookie = session_cookie(&state, "user", Role::User).await;

        let response = app
            .oneshot(get("/results?event=100+meters", Some(&cookie)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("EV0001"));
        assert!(body.contains("12.34"));
        assert!(!body.contains("Long Jump</h2>"));
        // Regular users get no edit controls
        assert!(!body.contains("/results/edit/"));
    }

    #[tokio::test]
    async fn test_non_admin_is_sent_back_to_results() {
        let (app, state) = create_test_app().await;
        let cookie = session_cookie(&state, "user", Role::User).await;

        for uri in ["/add", "/athletes", "/events", "/results/edit/1"] {
            let response = app.clone().oneshot(get(uri, Some(&cookie))).await.unwrap();

            assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
            assert_eq!(location(&response), Some("/results"), "{uri}");
            assert_eq!(flash(&response), Some(FlashMessage::error("Admins only")), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_add_result_mismatch_flashes_and_returns_to_form() {
        let (app, state) = create_test_app().await;
        let cookie = session_cookie(&state, "admin", Role::Admin).await;

        let response = app
            .oneshot(post_form(
                "/add",
                Some(&cookie),
                "athlete_id=ATH001&event_id=EV0003&result=12.1&status=Completed",
            ))
            .await
            .unwrap();

        assert_eq!(location(&response), Some("/add"));
        assert_eq!(
            flash(&response),
            Some(FlashMessage::error("Sex/grade mismatch between athlete & event"))
        );
        assert_eq!(ResultRepository::count(state.db()).await.unwrap(), 6);
    }

    #[tokio::test]
    async fn test_add_result_success() {
        let (app, state) = create_test_app().await;
        let cookie = session_cookie(&state, "admin", Role::Admin).await;

        let response = app
            .oneshot(post_form(
                "/add",
                Some(&cookie),
                "athlete_id=ATH004&event_id=EV0002&result=5.1&status=Completed",
            ))
            .await
            .unwrap();

        assert_eq!(location(&response), Some("/results"));
        assert_eq!(flash(&response), Some(FlashMessage::success("Result added")));
        assert_eq!(ResultRepository::count(state.db()).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_edit_result_round_trip() {
        let (app, state) = create_test_app().await;
        let cookie = session_cookie(&state, "admin", Role::Admin).await;

        let response = app.clone().oneshot(get("/results/edit/3", Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("12.80"));

        let response = app
            .clone()
            .oneshot(post_form("/results/edit/3", Some(&cookie), "result=abc&status=Completed"))
            .await
            .unwrap();
        assert_eq!(location(&response), Some("/results/edit/3"));
        assert_eq!(flash(&response), Some(FlashMessage::error("Result must be a number")));

        let response = app
            .oneshot(post_form("/results/edit/3", Some(&cookie), "result=12.10&status=Completed"))
            .await
            .unwrap();
        assert_eq!(location(&response), Some("/results"));
        let stored = ResultRepository::find_by_id(state.db(), 3).await.unwrap().unwrap();
        assert_eq!(stored.result, Some(12.1));
    }

    #[tokio::test]
    async fn test_edit_missing_result_redirects() {
        let (app, state) = create_test_app().await;
        let cookie = session_cookie(&state, "admin", Role::Admin).await;

        let response = app.oneshot(get("/results/edit/999", Some(&cookie))).await.unwrap();

        assert_eq!(location(&response), Some("/results"));
        assert_eq!(flash(&response), Some(FlashMessage::error("Result not found")));
    }

    #[tokio::test]
    async fn test_delete_result_and_missing_id() {
        let (app, state) = create_test_app().await;
        let cookie = session_cookie(&state, "admin", Role::Admin).await;

        let response = app
            .clone()
            .oneshot(post_form("/results/delete/1", Some(&cookie), ""))
            .await
            .unwrap();
        assert_eq!(location(&response), Some("/results"));
        assert_eq!(flash(&response), Some(FlashMessage::success("Result deleted successfully")));

        let response = app
            .oneshot(post_form("/results/delete/4242", Some(&cookie), ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(flash(&response), Some(FlashMessage::info("Result not found")));
        assert_eq!(ResultRepository::count(state.db()).await.unwrap(), 5);
    }
}
