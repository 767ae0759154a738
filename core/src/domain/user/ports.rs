use std::{
    collections::{HashMap, HashSet},
    future::Future,
};

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    user::{
        entities::{AuthorSummary, User, UserPreferences, UserProfile},
        value_objects::{RegisterUserInput, UpdatePreferencesInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn register_user(
        &self,
        input: RegisterUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_preferences(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<UserPreferences, CoreError>> + Send;

    fn update_preferences(
        &self,
        identity: Identity,
        input: UpdatePreferencesInput,
    ) -> impl Future<Output = Result<UserPreferences, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_id(&self, user_id: Uuid)
    -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Whether a user already owns the username or the e-mail address.
    fn exists(
        &self,
        username: String,
        email: String,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Inserts both rows in a single transaction.
    fn create_user_with_profile(
        &self,
        user: User,
        profile: UserProfile,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    /// Author summaries keyed by user id. Unknown ids are absent from the map.
    fn get_authors(
        &self,
        user_ids: HashSet<Uuid>,
    ) -> impl Future<Output = Result<HashMap<Uuid, AuthorSummary>, CoreError>> + Send;

    fn get_preferences(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn replace_preferences(
        &self,
        user_id: Uuid,
        categories: Vec<String>,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HasherRepository: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, CoreError>;

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CoreError>;
}
