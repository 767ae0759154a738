use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use dinesafely_core::domain::user::entities::UserPreferences;
use dinesafely_core::domain::user::ports::UserService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPreferencesResponse {
    pub data: UserPreferences,
}

#[utoipa::path(
    get,
    path = "/users/me/preferences",
    tag = "user",
    summary = "Get preferences",
    responses(
        (status = 200, body = GetPreferencesResponse),
        (status = 401, description = "Authentication required"),
    ),
)]
pub async fn get_preferences(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetPreferencesResponse>, ApiError> {
    let preferences = state
        .service
        .get_preferences(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPreferencesResponse { data: preferences }))
}
