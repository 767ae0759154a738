pub mod activity;
pub mod authentication;
pub mod common;
pub mod community;
pub mod favorite;
pub mod health;
pub mod moderation;
pub mod restaurant;
pub mod review;
pub mod safety;
pub mod user;
