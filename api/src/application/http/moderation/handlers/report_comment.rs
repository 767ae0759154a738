use crate::application::auth::RequiredIdentity;
use crate::application::http::moderation::validators::ReportContentValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dinesafely_core::domain::moderation::entities::{Report, ReportTarget};
use dinesafely_core::domain::moderation::ports::ModerationService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReportCommentResponse {
    pub data: Report,
}

#[utoipa::path(
    post,
    path = "/comments/{comment_id}/reports",
    tag = "moderation",
    summary = "Report comment",
    params(
        ("comment_id" = Uuid, Path, description = "Comment ID"),
    ),
    request_body = ReportContentValidator,
    responses(
        (status = 201, body = ReportCommentResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Comment not found"),
    ),
)]
pub async fn report_comment(
    Path(comment_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ReportContentValidator>,
) -> Result<Response<ReportCommentResponse>, ApiError> {
    let report = state
        .service
        .report_content(identity, ReportTarget::Comment, comment_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ReportCommentResponse { data: report }))
}
