use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::UpdatePreferencesValidator;
use axum::extract::State;
use dinesafely_core::domain::user::entities::UserPreferences;
use dinesafely_core::domain::user::ports::UserService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdatePreferencesResponse {
    pub data: UserPreferences,
}

#[utoipa::path(
    put,
    path = "/users/me/preferences",
    tag = "user",
    summary = "Update preferences",
    description = "Replaces the caller's preferred categories, used by the chatbot preference mode.",
    request_body = UpdatePreferencesValidator,
    responses(
        (status = 200, body = UpdatePreferencesResponse),
        (status = 400, description = "Invalid category alias"),
        (status = 401, description = "Authentication required"),
    ),
)]
pub async fn update_preferences(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdatePreferencesValidator>,
) -> Result<Response<UpdatePreferencesResponse>, ApiError> {
    let preferences = state
        .service
        .update_preferences(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdatePreferencesResponse { data: preferences }))
}
