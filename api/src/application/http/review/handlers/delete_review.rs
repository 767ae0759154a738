use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dinesafely_core::domain::review::ports::ReviewService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteReviewResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/reviews/{review_id}",
    tag = "review",
    summary = "Delete review",
    params(
        ("review_id" = Uuid, Path, description = "Review ID"),
    ),
    responses(
        (status = 200, body = DeleteReviewResponse),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Review not found"),
    ),
)]
pub async fn delete_review(
    Path(review_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteReviewResponse>, ApiError> {
    state
        .service
        .delete_review(identity, review_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteReviewResponse {
        message: "Review deleted successfully".to_string(),
    }))
}
