use crate::application::auth::RequiredIdentity;
use crate::application::http::review::validators::CreateCommentValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dinesafely_core::domain::review::entities::Comment;
use dinesafely_core::domain::review::ports::ReviewService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateCommentResponse {
    pub data: Comment,
}

#[utoipa::path(
    post,
    path = "/reviews/{review_id}/comments",
    tag = "review",
    summary = "Create comment",
    params(
        ("review_id" = Uuid, Path, description = "Review ID"),
    ),
    request_body = CreateCommentValidator,
    responses(
        (status = 201, body = CreateCommentResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Review not found"),
    ),
)]
pub async fn create_comment(
    Path(review_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateCommentValidator>,
) -> Result<Response<CreateCommentResponse>, ApiError> {
    let comment = state
        .service
        .create_comment(identity, review_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateCommentResponse { data: comment }))
}
