use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::user::entities::User;

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
    pub is_staff: bool,
}

impl Identity {
    pub fn id(&self) -> Uuid {
        self.user_id
    }

    pub fn is_staff(&self) -> bool {
        self.is_staff
    }
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            is_staff: user.is_staff,
        }
    }
}
