use std::collections::HashSet;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        favorite::ports::FavoriteRepository,
    },
    entity::favorite_restaurants::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresFavoriteRepository {
    pub db: DatabaseConnection,
}

impl PostgresFavoriteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FavoriteRepository for PostgresFavoriteRepository {
    async fn add(&self, user_id: Uuid, restaurant_id: Uuid) -> Result<(), CoreError> {
        let (now, timestamp) = generate_timestamp();
        let favorite = ActiveModel {
            id: Set(Uuid::new_v7(timestamp)),
            user_id: Set(user_id),
            restaurant_id: Set(restaurant_id),
            created_at: Set(now.fixed_offset()),
        };

        Entity::insert(favorite)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::RestaurantId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to save favorite: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn remove(&self, user_id: Uuid, restaurant_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::RestaurantId.eq(restaurant_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to remove favorite: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn is_favorite(&self, user_id: Uuid, restaurant_id: Uuid) -> Result<bool, CoreError> {
        let count = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::RestaurantId.eq(restaurant_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to check favorite: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn favorite_ids(
        &self,
        user_id: Uuid,
        restaurant_ids: Vec<Uuid>,
    ) -> Result<HashSet<Uuid>, CoreError> {
        if restaurant_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<Uuid> = Entity::find()
            .select_only()
            .column(Column::RestaurantId)
            .filter(Column::UserId.eq(user_id))
            .filter(Column::RestaurantId.is_in(restaurant_ids))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load favorites: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ids.into_iter().collect())
    }
}
