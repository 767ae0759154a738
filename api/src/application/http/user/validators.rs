use dinesafely_core::domain::user::{
    entities::UserProfileConfig,
    value_objects::{RegisterUserInput, UpdatePreferencesInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserValidator {
    #[validate(length(min = 3, max = 150, message = "username must be 3 to 150 characters"))]
    pub username: String,

    #[validate(
        email(message = "email is invalid"),
        length(max = 254, message = "email is too long")
    )]
    pub email: String,

    /// Checked against the password rules by the service.
    #[validate(length(min = 1, max = 128, message = "password must be 1 to 128 characters"))]
    pub password: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address1: Option<String>,

    #[serde(default)]
    pub address2: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    #[validate(length(max = 10, message = "zip_code is too long"))]
    pub zip_code: Option<String>,

    #[serde(default)]
    pub state: Option<String>,
}

impl From<RegisterUserValidator> for RegisterUserInput {
    fn from(payload: RegisterUserValidator) -> Self {
        Self {
            username: payload.username,
            email: payload.email,
            password: payload.password,
            profile: UserProfileConfig {
                phone: payload.phone,
                address1: payload.address1,
                address2: payload.address2,
                city: payload.city,
                zip_code: payload.zip_code,
                state: payload.state,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePreferencesValidator {
    /// Category aliases, for example `pizza` or `thai`.
    #[validate(length(max = 50, message = "at most 50 categories"))]
    pub categories: Vec<String>,
}

impl From<UpdatePreferencesValidator> for UpdatePreferencesInput {
    fn from(payload: UpdatePreferencesValidator) -> Self {
        Self {
            categories: payload.categories,
        }
    }
}
