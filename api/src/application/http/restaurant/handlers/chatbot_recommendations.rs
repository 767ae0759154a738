use crate::application::auth::OptionalIdentity;
use crate::application::http::restaurant::validators::ChatbotValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use dinesafely_core::domain::restaurant::entities::RestaurantSummary;
use dinesafely_core::domain::restaurant::ports::RestaurantService;
use dinesafely_core::domain::restaurant::value_objects::ChatbotInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatbotRecommendationsResponse {
    pub data: Vec<RestaurantSummary>,
}

#[utoipa::path(
    post,
    path = "/chatbot/recommendations",
    tag = "restaurant",
    summary = "Chatbot recommendations",
    description = "Up to three compliant, well rated restaurants in the location serving one of the categories.",
    request_body = ChatbotValidator,
    responses(
        (status = 200, body = ChatbotRecommendationsResponse),
        (status = 400, description = "Missing categories or location"),
    ),
)]
pub async fn chatbot_recommendations(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    ValidateJson(payload): ValidateJson<ChatbotValidator>,
) -> Result<Response<ChatbotRecommendationsResponse>, ApiError> {
    let restaurants = state
        .service
        .chatbot_recommendations(
            identity,
            ChatbotInput {
                categories: payload.categories,
                location: payload.location,
                is_preference: payload.is_preference,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChatbotRecommendationsResponse { data: restaurants }))
}
