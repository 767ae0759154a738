pub mod chatbot_recommendations;
pub mod get_inspection_records;
pub mod get_restaurant_profile;
pub mod get_similar_restaurants;
pub mod remove_favorite;
pub mod save_favorite;
pub mod search_restaurants;
