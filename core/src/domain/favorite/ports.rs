use std::{collections::HashSet, future::Future};

use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

#[cfg_attr(test, mockall::automock)]
pub trait FavoriteRepository: Send + Sync {
    /// No-op when the favorite already exists.
    fn add(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// No-op when the favorite does not exist.
    fn remove(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn is_favorite(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// The subset of `restaurant_ids` the user has saved.
    fn favorite_ids(
        &self,
        user_id: Uuid,
        restaurant_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<HashSet<Uuid>, CoreError>> + Send;
}
