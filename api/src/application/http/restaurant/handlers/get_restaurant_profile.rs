use crate::application::auth::OptionalIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use dinesafely_core::domain::restaurant::ports::RestaurantService;
use dinesafely_core::domain::restaurant::value_objects::RestaurantProfile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRestaurantProfileResponse {
    pub data: RestaurantProfile,
}

#[utoipa::path(
    get,
    path = "/restaurants/{restaurant_id}/profile",
    tag = "restaurant",
    summary = "Get restaurant profile",
    description = "Restaurant details, external metadata, latest inspection, recent reviews with stats, similar restaurants and Q&A preview. Records a visit for authenticated callers.",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
    ),
    responses(
        (status = 200, body = GetRestaurantProfileResponse),
        (status = 404, description = "Restaurant not found"),
    ),
)]
pub async fn get_restaurant_profile(
    Path(restaurant_id): Path<Uuid>,
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response<GetRestaurantProfileResponse>, ApiError> {
    let profile = state
        .service
        .get_restaurant_profile(identity, restaurant_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRestaurantProfileResponse { data: profile }))
}
