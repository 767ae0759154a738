use crate::application::auth::OptionalIdentity;
use crate::application::http::query_extractor::SearchQueryExtractor;
use crate::application::http::query_params::SearchRestaurantsQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use dinesafely_core::domain::restaurant::ports::RestaurantService;
use dinesafely_core::domain::restaurant::value_objects::{RestaurantPage, SearchRestaurantsInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchRestaurantsResponse {
    pub data: RestaurantPage,
}

#[utoipa::path(
    get,
    path = "/restaurants",
    tag = "restaurant",
    summary = "Search restaurants",
    description = "Filters, sorts and paginates restaurants, six per page. Authenticated callers see which results they saved.",
    params(SearchRestaurantsQuery),
    responses(
        (status = 200, body = SearchRestaurantsResponse),
        (status = 400, description = "Invalid filter value"),
        (status = 401, description = "Favorites filter without authentication"),
    ),
)]
pub async fn search_restaurants(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    SearchQueryExtractor(query): SearchQueryExtractor,
) -> Result<Response<SearchRestaurantsResponse>, ApiError> {
    let input = SearchRestaurantsInput::try_from(query)?;

    let page = state
        .service
        .search_restaurants(identity, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchRestaurantsResponse { data: page }))
}
