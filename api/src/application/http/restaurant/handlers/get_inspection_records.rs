use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dinesafely_core::domain::restaurant::entities::InspectionRecord;
use dinesafely_core::domain::restaurant::ports::RestaurantService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetInspectionRecordsResponse {
    pub data: Vec<InspectionRecord>,
}

#[utoipa::path(
    get,
    path = "/restaurants/{restaurant_id}/inspections",
    tag = "restaurant",
    summary = "Get inspection history",
    description = "Government inspection records of the restaurant, newest first. Empty when the inspection service is unavailable.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    responses(
        (status = 200, body = GetInspectionRecordsResponse),
        (status = 404, description = "Restaurant not found"),
    ),
)]
pub async fn get_inspection_records(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetInspectionRecordsResponse>, ApiError> {
    let records = state
        .service
        .get_inspection_records(restaurant_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetInspectionRecordsResponse { data: records }))
}
