use crate::{
    domain::{common::entities::app_errors::CoreError, moderation::entities::Report},
    entity::content_reports,
};

impl TryFrom<content_reports::Model> for Report {
    type Error = CoreError;

    fn try_from(model: content_reports::Model) -> Result<Self, Self::Error> {
        let target = model.target_kind.parse().map_err(|_| {
            tracing::error!("Unknown report target kind: {}", model.target_kind);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            id: model.id,
            target,
            target_id: model.target_id,
            reporter_id: model.reporter_id,
            reason: model.reason,
            created_at: model.created_at.to_utc(),
        })
    }
}
