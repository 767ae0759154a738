use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    activity::ports::ActivityLogRepository,
    common::{entities::app_errors::CoreError, generate_timestamp},
};

#[derive(Debug, Clone)]
pub struct PostgresActivityLogRepository {
    pub db: DatabaseConnection,
}

impl PostgresActivityLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ActivityLogRepository for PostgresActivityLogRepository {
    async fn record_visit(&self, user_id: Uuid, restaurant_id: Uuid) -> Result<u64, CoreError> {
        let (now, timestamp) = generate_timestamp();

        // Single statement: concurrent visits serialize on the unique (user_id, restaurant_id) row.
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO user_activity_logs (id, user_id, restaurant_id, visits, created_at, updated_at)
            VALUES ($1, $2, $3, 1, $4, $4)
            ON CONFLICT (user_id, restaurant_id)
            DO UPDATE SET
              visits = user_activity_logs.visits + 1,
              updated_at = EXCLUDED.updated_at
            RETURNING visits
            "#,
            [
                Uuid::new_v7(timestamp).into(),
                user_id.into(),
                restaurant_id.into(),
                now.fixed_offset().into(),
            ],
        );

        let row = self.db.query_one(stmt).await.map_err(|e| {
            error!("Failed to record visit: {}", e);
            CoreError::InternalServerError
        })?;

        let visits = row
            .and_then(|row| row.try_get::<i64>("", "visits").ok())
            .ok_or_else(|| {
                error!("Visit upsert returned no row");
                CoreError::InternalServerError
            })?;

        Ok(visits.max(0) as u64)
    }
}
