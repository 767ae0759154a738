use crate::application::http::community::validators::PageQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, Query, State};
use dinesafely_core::domain::community::ports::CommunityService;
use dinesafely_core::domain::community::value_objects::QuestionPage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListQuestionsResponse {
    pub data: QuestionPage,
}

#[utoipa::path(
    get,
    path = "/restaurants/{restaurant_id}/questions",
    tag = "community",
    summary = "List questions",
    description = "Ten questions per page, newest first, each with its two latest answers.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
        PageQuery
    ),
    responses(
        (status = 200, body = ListQuestionsResponse),
        (status = 404, description = "Restaurant not found"),
    ),
)]
pub async fn list_questions(
    Path(restaurant_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
    State(state): State<AppState>,
) -> Result<Response<ListQuestionsResponse>, ApiError> {
    let page = state
        .service
        .list_questions(restaurant_id, query.page())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListQuestionsResponse { data: page }))
}
