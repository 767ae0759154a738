use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dinesafely_core::domain::safety::aggregator::SafetyFeedbackSummary;
use dinesafely_core::domain::safety::ports::SafetyFeedbackService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSafetySummaryResponse {
    pub data: SafetyFeedbackSummary,
}

#[utoipa::path(
    get,
    path = "/restaurants/{restaurant_id}/safety-feedback",
    tag = "safety",
    summary = "Get safety questionnaire summary",
    description = "Latest submission, average safety level and the share of yes answers per question.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    responses(
        (status = 200, body = GetSafetySummaryResponse),
        (status = 404, description = "Restaurant not found"),
    ),
)]
pub async fn get_safety_summary(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetSafetySummaryResponse>, ApiError> {
    let summary = state
        .service
        .get_safety_summary(restaurant_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSafetySummaryResponse { data: summary }))
}
