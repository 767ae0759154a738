use crate::application::auth::RequiredIdentity;
use crate::application::http::moderation::validators::parse_decision;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dinesafely_core::domain::moderation::entities::ReportTarget;
use dinesafely_core::domain::moderation::ports::ModerationService;
use dinesafely_core::domain::moderation::value_objects::ModerationOutcome;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ModerateCommentResponse {
    pub data: ModerationOutcome,
}

#[utoipa::path(
    post,
    path = "/moderation/comments/{comment_id}/{decision}",
    tag = "moderation",
    summary = "Moderate comment",
    description = "Staff only. Closes every report on the comment, then hides it, deletes it or leaves it untouched. The author is notified.",
    params(
        ("comment_id" = Uuid, Path, description = "Comment ID"),
        ("decision" = String, Path, description = "hide, ignore or delete"),
    ),
    responses(
        (status = 200, body = ModerateCommentResponse),
        (status = 400, description = "Unknown decision"),
        (status = 403, description = "Caller is not staff"),
        (status = 404, description = "Comment not found"),
    ),
)]
pub async fn moderate_comment(
    Path((comment_id, decision)): Path<(Uuid, String)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ModerateCommentResponse>, ApiError> {
    let decision = parse_decision(&decision)?;

    let outcome = state
        .service
        .moderate_content(identity, ReportTarget::Comment, comment_id, decision)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ModerateCommentResponse { data: outcome }))
}
