use crate::application::auth::RequiredIdentity;
use crate::application::http::review::validators::UpdateReviewValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dinesafely_core::domain::review::entities::Review;
use dinesafely_core::domain::review::ports::ReviewService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateReviewResponse {
    pub data: Review,
}

#[utoipa::path(
    put,
    path = "/reviews/{review_id}",
    tag = "review",
    summary = "Update review",
    description = "Replaces the review. Every rating field is required.",
    params(
        ("review_id" = Uuid, Path, description = "Review ID"),
    ),
    request_body = UpdateReviewValidator,
    responses(
        (status = 200, body = UpdateReviewResponse),
        (status = 400, description = "Missing or out of range rating"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Review not found"),
    ),
)]
pub async fn update_review(
    Path(review_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateReviewValidator>,
) -> Result<Response<UpdateReviewResponse>, ApiError> {
    let review = state
        .service
        .update_review(identity, review_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateReviewResponse { data: review }))
}
