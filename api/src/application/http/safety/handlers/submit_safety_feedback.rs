use crate::application::auth::OptionalIdentity;
use crate::application::http::safety::validators::SubmitSafetyFeedbackValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dinesafely_core::domain::safety::entities::SafetyFeedback;
use dinesafely_core::domain::safety::ports::SafetyFeedbackService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SubmitSafetyFeedbackResponse {
    pub data: SafetyFeedback,
}

#[utoipa::path(
    post,
    path = "/restaurants/{restaurant_id}/safety-feedback",
    tag = "safety",
    summary = "Submit safety questionnaire",
    description = "Anonymous submissions are accepted. Signed-in callers are recorded as the author.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    request_body = SubmitSafetyFeedbackValidator,
    responses(
        (status = 201, body = SubmitSafetyFeedbackResponse),
        (status = 400, description = "Safety level out of range"),
        (status = 404, description = "Restaurant not found"),
    ),
)]
pub async fn submit_safety_feedback(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    ValidateJson(payload): ValidateJson<SubmitSafetyFeedbackValidator>,
) -> Result<Response<SubmitSafetyFeedbackResponse>, ApiError> {
    let feedback = state
        .service
        .submit_safety_feedback(identity, restaurant_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SubmitSafetyFeedbackResponse { data: feedback }))
}
