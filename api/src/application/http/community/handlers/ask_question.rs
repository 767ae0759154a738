use crate::application::auth::RequiredIdentity;
use crate::application::http::community::validators::AskQuestionValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dinesafely_core::domain::community::entities::Question;
use dinesafely_core::domain::community::ports::CommunityService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AskQuestionResponse {
    pub data: Question,
}

#[utoipa::path(
    post,
    path = "/restaurants/{restaurant_id}/questions",
    tag = "community",
    summary = "Ask question",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    request_body = AskQuestionValidator,
    responses(
        (status = 201, body = AskQuestionResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Restaurant not found"),
    ),
)]
pub async fn ask_question(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AskQuestionValidator>,
) -> Result<Response<AskQuestionResponse>, ApiError> {
    let question = state
        .service
        .ask_question(identity, restaurant_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AskQuestionResponse { data: question }))
}
