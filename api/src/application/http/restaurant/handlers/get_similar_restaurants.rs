use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, Query, State};
use dinesafely_core::domain::restaurant::entities::RestaurantSummary;
use dinesafely_core::domain::restaurant::ports::RestaurantService;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetSimilarRestaurantsQuery {
    /// Size of the candidate window, between 1 and 100. Defaults to 20.
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSimilarRestaurantsResponse {
    pub data: Vec<RestaurantSummary>,
}

#[utoipa::path(
    get,
    path = "/restaurants/{restaurant_id}/similar",
    tag = "restaurant",
    summary = "Get similar restaurants",
    description = "Restaurants sharing the neighborhood, compliance status and at least one category. Never contains the restaurant itself.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
        GetSimilarRestaurantsQuery
    ),
    responses(
        (status = 200, body = GetSimilarRestaurantsResponse),
        (status = 400, description = "Limit out of range"),
        (status = 404, description = "Restaurant not found"),
    ),
)]
pub async fn get_similar_restaurants(
    Path(restaurant_id): Path<Uuid>,
    Query(query): Query<GetSimilarRestaurantsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetSimilarRestaurantsResponse>, ApiError> {
    let restaurants = state
        .service
        .get_similar_restaurants(restaurant_id, query.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSimilarRestaurantsResponse { data: restaurants }))
}
