use crate::application::http::community::validators::PageQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, Query, State};
use dinesafely_core::domain::community::ports::CommunityService;
use dinesafely_core::domain::community::value_objects::AnswerPage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListAnswersResponse {
    pub data: AnswerPage,
}

#[utoipa::path(
    get,
    path = "/questions/{question_id}/answers",
    tag = "community",
    summary = "List answers",
    description = "Ten answers per page, newest first.",
    params(
        ("question_id" = Uuid, Path, description = "Question ID"),
        PageQuery
    ),
    responses(
        (status = 200, body = ListAnswersResponse),
        (status = 404, description = "Question not found"),
    ),
)]
pub async fn list_answers(
    Path(question_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
    State(state): State<AppState>,
) -> Result<Response<ListAnswersResponse>, ApiError> {
    let page = state
        .service
        .list_answers(question_id, query.page())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListAnswersResponse { data: page }))
}
