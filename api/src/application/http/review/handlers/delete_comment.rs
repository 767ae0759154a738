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
pub struct DeleteCommentResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/comments/{comment_id}",
    tag = "review",
    summary = "Delete comment",
    params(
        ("comment_id" = Uuid, Path, description = "Comment ID"),
    ),
    responses(
        (status = 200, body = DeleteCommentResponse),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Comment not found"),
    ),
)]
pub async fn delete_comment(
    Path(comment_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteCommentResponse>, ApiError> {
    state
        .service
        .delete_comment(identity, comment_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteCommentResponse {
        message: "Comment deleted successfully".to_string(),
    }))
}
