use crate::application::auth::RequiredIdentity;
use crate::application::http::review::validators::CreateReviewValidator;
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
pub struct CreateReviewResponse {
    pub data: Review,
}

#[utoipa::path(
    post,
    path = "/restaurants/{restaurant_id}/reviews",
    tag = "review",
    summary = "Create review",
    description = "One review per restaurant and two reviews overall per user in any 24 hour window.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    request_body = CreateReviewValidator,
    responses(
        (status = 201, body = CreateReviewResponse),
        (status = 400, description = "Rating out of range"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Restaurant not found"),
        (status = 429, description = "Review limit exceeded"),
    ),
)]
pub async fn create_review(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateReviewValidator>,
) -> Result<Response<CreateReviewResponse>, ApiError> {
    let review = state
        .service
        .create_review(identity, restaurant_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateReviewResponse { data: review }))
}
