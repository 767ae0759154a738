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
pub struct ReportReviewResponse {
    pub data: Report,
}

#[utoipa::path(
    post,
    path = "/reviews/{review_id}/reports",
    tag = "moderation",
    summary = "Report review",
    params(
        ("review_id" = Uuid, Path, description = "Review ID"),
    ),
    request_body = ReportContentValidator,
    responses(
        (status = 201, body = ReportReviewResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Review not found"),
    ),
)]
pub async fn report_review(
    Path(review_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ReportContentValidator>,
) -> Result<Response<ReportReviewResponse>, ApiError> {
    let report = state
        .service
        .report_content(identity, ReportTarget::Review, review_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ReportReviewResponse { data: report }))
}
