use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            username,
            email,
            password_hash,
            is_staff: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Contact details and avatar, created together with the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub phone: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub state: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct UserProfileConfig {
    pub phone: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub state: Option<String>,
}

impl UserProfile {
    pub fn new(user_id: Uuid, config: UserProfileConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            phone: config.phone,
            address1: config.address1,
            address2: config.address2,
            city: config.city,
            zip_code: config.zip_code,
            state: config.state,
            photo: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Public author information attached to reviews, comments and Q&A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorSummary {
    pub user_id: Uuid,
    pub username: String,
    pub photo: Option<String>,
}

impl AuthorSummary {
    /// Placeholder used when the author row is gone.
    pub fn unknown(user_id: Uuid) -> Self {
        Self {
            user_id,
            username: "[deleted]".to_string(),
            photo: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserPreferences {
    pub user_id: Uuid,
    pub categories: Vec<String>,
}
