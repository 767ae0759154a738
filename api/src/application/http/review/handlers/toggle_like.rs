use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dinesafely_core::domain::review::entities::LikeToggle;
use dinesafely_core::domain::review::ports::ReviewService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ToggleLikeResponse {
    pub data: LikeToggle,
}

#[utoipa::path(
    post,
    path = "/reviews/{review_id}/like",
    tag = "review",
    summary = "Toggle like",
    description = "Likes the review, or removes the caller's like when already present.",
    params(
        ("review_id" = Uuid, Path, description = "Review ID"),
    ),
    responses(
        (status = 200, body = ToggleLikeResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Review not found"),
    ),
)]
pub async fn toggle_like(
    Path(review_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ToggleLikeResponse>, ApiError> {
    let toggle = state
        .service
        .toggle_like(identity, review_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ToggleLikeResponse { data: toggle }))
}
