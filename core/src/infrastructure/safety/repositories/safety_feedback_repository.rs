use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        safety::{entities::SafetyFeedback, ports::SafetyFeedbackRepository},
    },
    entity::safety_feedback,
};

#[derive(Debug, Clone)]
pub struct PostgresSafetyFeedbackRepository {
    pub db: DatabaseConnection,
}

impl PostgresSafetyFeedbackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SafetyFeedbackRepository for PostgresSafetyFeedbackRepository {
    async fn create(&self, feedback: SafetyFeedback) -> Result<SafetyFeedback, CoreError> {
        let checklist = feedback.checklist;
        let active_model = safety_feedback::ActiveModel {
            id: Set(feedback.id),
            restaurant_id: Set(feedback.restaurant_id),
            user_id: Set(feedback.user_id),
            safety_level: Set(feedback.safety_level),
            temperature_required: Set(checklist.temperature_required),
            contact_info_required: Set(checklist.contact_info_required),
            employee_mask: Set(checklist.employee_mask),
            capacity_compliant: Set(checklist.capacity_compliant),
            distance_compliant: Set(checklist.distance_compliant),
            created_at: Set(feedback.created_at.fixed_offset()),
        };

        let created = safety_feedback::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create safety feedback: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(SafetyFeedback::from(created))
    }

    async fn fetch_for_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<SafetyFeedback>, CoreError> {
        let feedback = safety_feedback::Entity::find()
            .filter(safety_feedback::Column::RestaurantId.eq(restaurant_id))
            .order_by_desc(safety_feedback::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch safety feedback: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(feedback.into_iter().map(SafetyFeedback::from).collect())
    }
}
