use super::handlers::get_preferences::{__path_get_preferences, get_preferences};
use super::handlers::register_user::{__path_register_user, register_user};
use super::handlers::update_preferences::{__path_update_preferences, update_preferences};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(register_user, get_preferences, update_preferences))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/users"), post(register_user))
        .route(
            &format!("{root_path}/users/me/preferences"),
            get(get_preferences).put(update_preferences),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
