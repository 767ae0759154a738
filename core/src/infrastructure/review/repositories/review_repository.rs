use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait, sea_query::{Expr, OnConflict},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        review::{
            entities::{LikeToggle, Review},
            ports::ReviewRepository,
        },
    },
    entity::{
        review_likes,
        reviews::{ActiveModel, Column, Entity},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresReviewRepository {
    pub db: DatabaseConnection,
}

impl PostgresReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(review: &Review) -> ActiveModel {
    ActiveModel {
        id: Set(review.id),
        restaurant_id: Set(review.restaurant_id),
        user_id: Set(review.user_id),
        rating: Set(review.rating),
        rating_safety: Set(review.sub_ratings.safety),
        rating_entry: Set(review.sub_ratings.entry),
        rating_door: Set(review.sub_ratings.door),
        rating_table: Set(review.sub_ratings.table),
        rating_bathroom: Set(review.sub_ratings.bathroom),
        rating_path: Set(review.sub_ratings.path),
        content: Set(review.content.clone()),
        image1: Set(review.image1.clone()),
        image2: Set(review.image2.clone()),
        image3: Set(review.image3.clone()),
        hidden: Set(review.hidden),
        created_at: Set(review.created_at.fixed_offset()),
        updated_at: Set(review.updated_at.fixed_offset()),
    }
}

impl ReviewRepository for PostgresReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, CoreError> {
        let created = Entity::insert(active_model(&review))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create review: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Review::from(created))
    }

    async fn get_by_id(&self, review_id: Uuid) -> Result<Option<Review>, CoreError> {
        let review = Entity::find_by_id(review_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get review: {}", e);
                CoreError::InternalServerError
            })?
            .map(Review::from);

        Ok(review)
    }

    async fn update(&self, review: Review) -> Result<Review, CoreError> {
        let updated = Entity::update(active_model(&review))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update review: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Review::from(updated))
    }

    async fn delete(&self, review_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(review_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete review: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn fetch_recent_visible(
        &self,
        restaurant_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Review>, CoreError> {
        let reviews = Entity::find()
            .filter(Column::RestaurantId.eq(restaurant_id))
            .filter(Column::Hidden.eq(false))
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch reviews: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(reviews.into_iter().map(Review::from).collect())
    }

    async fn count_since(
        &self,
        user_id: Uuid,
        restaurant_id: Option<Uuid>,
        since: DateTime<Utc>,
    ) -> Result<u64, CoreError> {
        let mut select = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CreatedAt.gte(since.fixed_offset()));

        if let Some(restaurant_id) = restaurant_id {
            select = select.filter(Column::RestaurantId.eq(restaurant_id));
        }

        select.count(&self.db).await.map_err(|e| {
            error!("Failed to count recent reviews: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn toggle_like(&self, review_id: Uuid, user_id: Uuid) -> Result<LikeToggle, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start like transaction: {}", e);
            CoreError::InternalServerError
        })?;

        // Toggles on one review serialize on its row lock.
        Entity::find_by_id(review_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(|e| {
                error!("Failed to lock review for like: {}", e);
                CoreError::InternalServerError
            })?;

        let removed = review_likes::Entity::delete_many()
            .filter(review_likes::Column::ReviewId.eq(review_id))
            .filter(review_likes::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to remove like: {}", e);
                CoreError::InternalServerError
            })?;

        let liked = removed.rows_affected == 0;
        if liked {
            let (now, timestamp) = generate_timestamp();
            let like = review_likes::ActiveModel {
                id: Set(Uuid::new_v7(timestamp)),
                review_id: Set(review_id),
                user_id: Set(user_id),
                created_at: Set(now.fixed_offset()),
            };

            review_likes::Entity::insert(like)
                .on_conflict(
                    OnConflict::columns([
                        review_likes::Column::ReviewId,
                        review_likes::Column::UserId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to add like: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        let likes_num = review_likes::Entity::find()
            .filter(review_likes::Column::ReviewId.eq(review_id))
            .count(&txn)
            .await
            .map_err(|e| {
                error!("Failed to count likes: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit like transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(LikeToggle { liked, likes_num })
    }

    async fn count_likes(&self, review_ids: Vec<Uuid>) -> Result<HashMap<Uuid, u64>, CoreError> {
        if review_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(Uuid, i64)> = review_likes::Entity::find()
            .select_only()
            .column(review_likes::Column::ReviewId)
            .column_as(review_likes::Column::Id.count(), "likes")
            .filter(review_likes::Column::ReviewId.is_in(review_ids))
            .group_by(review_likes::Column::ReviewId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count likes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .map(|(review_id, likes)| (review_id, likes.max(0) as u64))
            .collect())
    }

    async fn liked_by(
        &self,
        review_ids: Vec<Uuid>,
        user_id: Uuid,
    ) -> Result<HashSet<Uuid>, CoreError> {
        if review_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let liked: Vec<Uuid> = review_likes::Entity::find()
            .select_only()
            .column(review_likes::Column::ReviewId)
            .filter(review_likes::Column::ReviewId.is_in(review_ids))
            .filter(review_likes::Column::UserId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load liked reviews: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(liked.into_iter().collect())
    }

    async fn set_hidden(&self, review_id: Uuid, hidden: bool) -> Result<(), CoreError> {
        Entity::update_many()
            .col_expr(Column::Hidden, Expr::value(hidden))
            .filter(Column::Id.eq(review_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to set review visibility: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
