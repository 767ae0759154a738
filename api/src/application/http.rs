pub mod community;
pub mod health;
pub mod moderation;
pub mod query_extractor;
pub mod query_params;
pub mod restaurant;
pub mod review;
pub mod safety;
pub mod server;
pub mod user;
