pub mod get_preferences;
pub mod register_user;
pub mod update_preferences;
