use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        moderation::{
            entities::{Report, ReportTarget},
            ports::ReportRepository,
        },
    },
    entity::content_reports::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresReportRepository {
    pub db: DatabaseConnection,
}

impl PostgresReportRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReportRepository for PostgresReportRepository {
    async fn create(&self, report: Report) -> Result<Report, CoreError> {
        let active_model = ActiveModel {
            id: Set(report.id),
            target_kind: Set(report.target.as_str().to_string()),
            target_id: Set(report.target_id),
            reporter_id: Set(report.reporter_id),
            reason: Set(report.reason.clone()),
            created_at: Set(report.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create report: {}", e);
                CoreError::InternalServerError
            })?;

        Report::try_from(created)
    }

    async fn close_reports(&self, target: ReportTarget, target_id: Uuid) -> Result<u64, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::TargetKind.eq(target.as_str()))
            .filter(Column::TargetId.eq(target_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to close reports: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
