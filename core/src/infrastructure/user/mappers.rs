use crate::{
    domain::user::entities::{AuthorSummary, User, UserProfile},
    entity::{user_profiles, users},
};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username.clone(),
            email: model.email.clone(),
            password_hash: model.password_hash.clone(),
            is_staff: model.is_staff,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&user_profiles::Model> for UserProfile {
    fn from(model: &user_profiles::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            phone: model.phone.clone(),
            address1: model.address1.clone(),
            address2: model.address2.clone(),
            city: model.city.clone(),
            zip_code: model.zip_code.clone(),
            state: model.state.clone(),
            photo: model.photo.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

pub fn author_summary(user: &users::Model, photo: Option<String>) -> AuthorSummary {
    AuthorSummary {
        user_id: user.id,
        username: user.username.clone(),
        photo,
    }
}
