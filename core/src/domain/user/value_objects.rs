use crate::domain::user::entities::UserProfileConfig;

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub profile: UserProfileConfig,
}

#[derive(Debug, Clone)]
pub struct UpdatePreferencesInput {
    pub categories: Vec<String>,
}
