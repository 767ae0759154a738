use super::handlers::chatbot_recommendations::{
    __path_chatbot_recommendations, chatbot_recommendations,
};
use super::handlers::get_inspection_records::{
    __path_get_inspection_records, get_inspection_records,
};
use super::handlers::get_restaurant_profile::{
    __path_get_restaurant_profile, get_restaurant_profile,
};
use super::handlers::get_similar_restaurants::{
    __path_get_similar_restaurants, get_similar_restaurants,
};
use super::handlers::remove_favorite::{__path_remove_favorite, remove_favorite};
use super::handlers::save_favorite::{__path_save_favorite, save_favorite};
use super::handlers::search_restaurants::{__path_search_restaurants, search_restaurants};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    search_restaurants,
    get_restaurant_profile,
    get_inspection_records,
    get_similar_restaurants,
    chatbot_recommendations,
    save_favorite,
    remove_favorite
))]
pub struct RestaurantApiDoc;

pub fn restaurant_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/restaurants"), get(search_restaurants))
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}/profile"),
            get(get_restaurant_profile),
        )
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}/inspections"),
            get(get_inspection_records),
        )
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}/similar"),
            get(get_similar_restaurants),
        )
        .route(
            &format!("{root_path}/chatbot/recommendations"),
            post(chatbot_recommendations),
        )
        .route(
            &format!("{root_path}/favorites/{{business_id}}"),
            post(save_favorite).delete(remove_favorite),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
