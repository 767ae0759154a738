use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatbotValidator {
    /// Category aliases. Ignored when `is_preference` is set.
    #[serde(default)]
    pub categories: Option<Vec<String>>,

    #[serde(default)]
    #[validate(length(max = 128, message = "location is too long"))]
    pub location: Option<String>,

    /// Use the caller's saved preferences instead of `categories`.
    #[serde(default)]
    pub is_preference: bool,
}
