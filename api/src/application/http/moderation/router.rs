use super::handlers::moderate_comment::{__path_moderate_comment, moderate_comment};
use super::handlers::moderate_review::{__path_moderate_review, moderate_review};
use super::handlers::report_comment::{__path_report_comment, report_comment};
use super::handlers::report_review::{__path_report_review, report_review};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(report_review, report_comment, moderate_review, moderate_comment))]
pub struct ModerationApiDoc;

pub fn moderation_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/reviews/{{review_id}}/reports"),
            post(report_review),
        )
        .route(
            &format!("{root_path}/comments/{{comment_id}}/reports"),
            post(report_comment),
        )
        .route(
            &format!("{root_path}/moderation/reviews/{{review_id}}/{{decision}}"),
            post(moderate_review),
        )
        .route(
            &format!("{root_path}/moderation/comments/{{comment_id}}/{{decision}}"),
            post(moderate_comment),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
