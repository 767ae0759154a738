use super::handlers::create_comment::{__path_create_comment, create_comment};
use super::handlers::create_review::{__path_create_review, create_review};
use super::handlers::delete_comment::{__path_delete_comment, delete_comment};
use super::handlers::delete_review::{__path_delete_review, delete_review};
use super::handlers::toggle_like::{__path_toggle_like, toggle_like};
use super::handlers::update_review::{__path_update_review, update_review};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_review,
    update_review,
    delete_review,
    toggle_like,
    create_comment,
    delete_comment
))]
pub struct ReviewApiDoc;

pub fn review_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}/reviews"),
            post(create_review),
        )
        .route(
            &format!("{root_path}/reviews/{{review_id}}"),
            put(update_review).delete(delete_review),
        )
        .route(
            &format!("{root_path}/reviews/{{review_id}}/like"),
            post(toggle_like),
        )
        .route(
            &format!("{root_path}/reviews/{{review_id}}/comments"),
            post(create_comment),
        )
        .route(
            &format!("{root_path}/comments/{{comment_id}}"),
            delete(delete_comment),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
