use crate::application::auth::RequiredIdentity;
use crate::application::http::community::validators::AnswerQuestionValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dinesafely_core::domain::community::entities::Answer;
use dinesafely_core::domain::community::ports::CommunityService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnswerQuestionResponse {
    pub data: Answer,
}

#[utoipa::path(
    post,
    path = "/questions/{question_id}/answers",
    tag = "community",
    summary = "Answer question",
    params(
        ("question_id" = Uuid, Path, description = "Question ID"),
    ),
    request_body = AnswerQuestionValidator,
    responses(
        (status = 201, body = AnswerQuestionResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Question not found"),
    ),
)]
pub async fn answer_question(
    Path(question_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AnswerQuestionValidator>,
) -> Result<Response<AnswerQuestionResponse>, ApiError> {
    let answer = state
        .service
        .answer_question(identity, question_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AnswerQuestionResponse { data: answer }))
}
