use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        review::{entities::Comment, ports::CommentRepository},
    },
    entity::comments::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresCommentRepository {
    pub db: DatabaseConnection,
}

impl PostgresCommentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, CoreError> {
        let active_model = ActiveModel {
            id: Set(comment.id),
            review_id: Set(comment.review_id),
            user_id: Set(comment.user_id),
            text: Set(comment.text.clone()),
            hidden: Set(comment.hidden),
            created_at: Set(comment.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create comment: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Comment::from(created))
    }

    async fn get_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>, CoreError> {
        let comment = Entity::find_by_id(comment_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get comment: {}", e);
                CoreError::InternalServerError
            })?
            .map(Comment::from);

        Ok(comment)
    }

    async fn delete(&self, comment_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(comment_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete comment: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn fetch_visible_for_reviews(
        &self,
        review_ids: Vec<Uuid>,
    ) -> Result<Vec<Comment>, CoreError> {
        if review_ids.is_empty() {
            return Ok(Vec::new());
        }

        let comments = Entity::find()
            .filter(Column::ReviewId.is_in(review_ids))
            .filter(Column::Hidden.eq(false))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch comments: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(comments.into_iter().map(Comment::from).collect())
    }

    async fn set_hidden(&self, comment_id: Uuid, hidden: bool) -> Result<(), CoreError> {
        Entity::update_many()
            .col_expr(Column::Hidden, Expr::value(hidden))
            .filter(Column::Id.eq(comment_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to set comment visibility: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
