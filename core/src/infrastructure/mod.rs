pub mod activity;
pub mod community;
pub mod covid;
pub mod crypto;
pub mod db;
pub mod favorite;
pub mod health;
pub mod inspection;
pub mod jwt;
pub mod metadata;
pub mod moderation;
pub mod notifier;
pub mod random;
pub mod restaurant;
pub mod review;
pub mod safety;
pub mod user;
