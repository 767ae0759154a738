use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dinesafely_core::domain::restaurant::ports::RestaurantService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RemoveFavoriteResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/favorites/{business_id}",
    tag = "restaurant",
    summary = "Remove favorite",
    params(
        ("business_id" = String, Path, description = "External business ID"),
    ),
    responses(
        (status = 200, body = RemoveFavoriteResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Restaurant not found"),
    ),
)]
pub async fn remove_favorite(
    Path(business_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<RemoveFavoriteResponse>, ApiError> {
    state
        .service
        .remove_favorite(identity, business_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RemoveFavoriteResponse {
        message: "Restaurant removed from favorites".to_string(),
    }))
}
