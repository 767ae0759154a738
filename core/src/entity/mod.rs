//! sea-orm entities for the DineSafely schema. Tables are created by the
//! SQL migrations under `core/migrations`.

pub mod comments;
pub mod content_reports;
pub mod faqs;
pub mod favorite_restaurants;
pub mod restaurant_answers;
pub mod restaurant_categories;
pub mod restaurant_questions;
pub mod restaurants;
pub mod review_likes;
pub mod reviews;
pub mod safety_feedback;
pub mod user_activity_logs;
pub mod user_preferences;
pub mod user_profiles;
pub mod users;
