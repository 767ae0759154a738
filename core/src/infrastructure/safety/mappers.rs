use crate::{
    domain::safety::entities::{SafetyChecklist, SafetyFeedback},
    entity::safety_feedback,
};

impl From<safety_feedback::Model> for SafetyFeedback {
    fn from(model: safety_feedback::Model) -> Self {
        Self {
            id: model.id,
            restaurant_id: model.restaurant_id,
            user_id: model.user_id,
            safety_level: model.safety_level,
            checklist: SafetyChecklist {
                temperature_required: model.temperature_required,
                contact_info_required: model.contact_info_required,
                employee_mask: model.employee_mask,
                capacity_compliant: model.capacity_compliant,
                distance_compliant: model.distance_compliant,
            },
            created_at: model.created_at.to_utc(),
        }
    }
}
