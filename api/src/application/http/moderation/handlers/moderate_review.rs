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
pub struct ModerateReviewResponse {
    pub data: ModerationOutcome,
}

#[utoipa::path(
    post,
    path = "/moderation/reviews/{review_id}/{decision}",
    tag = "moderation",
    summary = "Moderate review",
    description = "Staff only. Closes every report on the review, then hides it, deletes it or leaves it untouched. The author is notified.",
    params(
        ("review_id" = Uuid, Path, description = "Review ID"),
        ("decision" = String, Path, description = "hide, ignore or delete"),
    ),
    responses(
        (status = 200, body = ModerateReviewResponse),
        (status = 400, description = "Unknown decision"),
        (status = 403, description = "Caller is not staff"),
        (status = 404, description = "Review not found"),
    ),
)]
pub async fn moderate_review(
    Path((review_id, decision)): Path<(Uuid, String)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ModerateReviewResponse>, ApiError> {
    let decision = parse_decision(&decision)?;

    let outcome = state
        .service
        .moderate_content(identity, ReportTarget::Review, review_id, decision)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ModerateReviewResponse { data: outcome }))
}
