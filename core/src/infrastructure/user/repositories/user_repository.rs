use std::collections::{HashMap, HashSet};

use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        user::{
            entities::{AuthorSummary, User, UserProfile},
            ports::UserRepository,
        },
    },
    entity::{user_preferences, user_profiles, users},
    infrastructure::user::mappers::author_summary,
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_insert_error(e: DbErr) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        error!("User insert hit a unique constraint: {}", detail);
        return CoreError::AlreadyExists("username or email already taken".to_string());
    }

    error!("Failed to create user: {}", e);
    CoreError::InternalServerError
}

impl UserRepository for PostgresUserRepository {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn exists(&self, username: String, email: String) -> Result<bool, CoreError> {
        let count = users::Entity::find()
            .filter(
                Condition::any()
                    .add(users::Column::Username.eq(username))
                    .add(users::Column::Email.eq(email)),
            )
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to check user existence: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn create_user_with_profile(
        &self,
        user: User,
        profile: UserProfile,
    ) -> Result<User, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let user_model = users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            is_staff: Set(user.is_staff),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        };

        let created = users::Entity::insert(user_model)
            .exec_with_returning(&txn)
            .await
            .map_err(map_insert_error)?;

        let profile_model = user_profiles::ActiveModel {
            id: Set(profile.id),
            user_id: Set(created.id),
            phone: Set(profile.phone),
            address1: Set(profile.address1),
            address2: Set(profile.address2),
            city: Set(profile.city),
            zip_code: Set(profile.zip_code),
            state: Set(profile.state),
            photo: Set(profile.photo),
            created_at: Set(profile.created_at.fixed_offset()),
            updated_at: Set(profile.updated_at.fixed_offset()),
        };

        user_profiles::Entity::insert(profile_model)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create user profile: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit user creation: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created.into())
    }

    async fn get_authors(
        &self,
        user_ids: HashSet<Uuid>,
    ) -> Result<HashMap<Uuid, AuthorSummary>, CoreError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ids: Vec<Uuid> = user_ids.into_iter().collect();

        let users = users::Entity::find()
            .filter(users::Column::Id.is_in(ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load authors: {}", e);
                CoreError::InternalServerError
            })?;

        let photos: HashMap<Uuid, Option<String>> = user_profiles::Entity::find()
            .select_only()
            .column(user_profiles::Column::UserId)
            .column(user_profiles::Column::Photo)
            .filter(user_profiles::Column::UserId.is_in(ids))
            .into_tuple::<(Uuid, Option<String>)>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load author photos: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .collect();

        Ok(users
            .iter()
            .map(|user| {
                let photo = photos.get(&user.id).cloned().flatten();
                (user.id, author_summary(user, photo))
            })
            .collect())
    }

    async fn get_preferences(&self, user_id: Uuid) -> Result<Vec<String>, CoreError> {
        user_preferences::Entity::find()
            .select_only()
            .column(user_preferences::Column::Category)
            .filter(user_preferences::Column::UserId.eq(user_id))
            .order_by_asc(user_preferences::Column::Category)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load preferences: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn replace_preferences(
        &self,
        user_id: Uuid,
        categories: Vec<String>,
    ) -> Result<Vec<String>, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start transaction: {}", e);
            CoreError::InternalServerError
        })?;

        user_preferences::Entity::delete_many()
            .filter(user_preferences::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to clear preferences: {}", e);
                CoreError::InternalServerError
            })?;

        if !categories.is_empty() {
            let (now, timestamp) = generate_timestamp();
            let rows = categories.iter().map(|category| user_preferences::ActiveModel {
                id: Set(Uuid::new_v7(timestamp)),
                user_id: Set(user_id),
                category: Set(category.clone()),
                created_at: Set(now.fixed_offset()),
            });

            user_preferences::Entity::insert_many(rows)
                .exec_without_returning(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to store preferences: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit preferences: {}", e);
            CoreError::InternalServerError
        })?;

        let mut stored = categories;
        stored.sort();
        Ok(stored)
    }
}
