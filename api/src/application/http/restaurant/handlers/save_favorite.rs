use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dinesafely_core::domain::restaurant::ports::RestaurantService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveFavoriteResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/favorites/{business_id}",
    tag = "restaurant",
    summary = "Save favorite",
    description = "Adds the restaurant to the caller's favorites. Saving twice is a no-op.",
    params(
        ("business_id" = String, Path, description = "External business ID"),
    ),
    responses(
        (status = 200, body = SaveFavoriteResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Restaurant not found"),
    ),
)]
pub async fn save_favorite(
    Path(business_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<SaveFavoriteResponse>, ApiError> {
    state
        .service
        .save_favorite(identity, business_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SaveFavoriteResponse {
        message: "Restaurant saved".to_string(),
    }))
}
