use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use dinesafely_core::domain::community::entities::Faq;
use dinesafely_core::domain::community::ports::CommunityService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListFaqsResponse {
    pub data: Vec<Faq>,
}

#[utoipa::path(
    get,
    path = "/faqs",
    tag = "community",
    summary = "List FAQs",
    responses(
        (status = 200, body = ListFaqsResponse),
    ),
)]
pub async fn list_faqs(
    State(state): State<AppState>,
) -> Result<Response<ListFaqsResponse>, ApiError> {
    let faqs = state.service.list_faqs().await.map_err(ApiError::from)?;

    Ok(Response::OK(ListFaqsResponse { data: faqs }))
}
