use super::handlers::get_safety_summary::{__path_get_safety_summary, get_safety_summary};
use super::handlers::submit_safety_feedback::{
    __path_submit_safety_feedback, submit_safety_feedback,
};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_safety_summary, submit_safety_feedback))]
pub struct SafetyApiDoc;

pub fn safety_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}/safety-feedback"),
            get(get_safety_summary).post(submit_safety_feedback),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
