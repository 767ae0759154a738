use dinesafely_core::domain::safety::{
    entities::SafetyChecklist, value_objects::SubmitSafetyFeedbackInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// COVID-19 safety questionnaire. Unanswered questions count as "no".
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitSafetyFeedbackValidator {
    #[validate(range(min = 1, max = 5, message = "safety_level must be between 1 and 5"))]
    pub safety_level: i32,

    #[serde(default)]
    pub temperature_required: bool,

    #[serde(default)]
    pub contact_info_required: bool,

    #[serde(default)]
    pub employee_mask: bool,

    #[serde(default)]
    pub capacity_compliant: bool,

    #[serde(default)]
    pub distance_compliant: bool,
}

impl From<SubmitSafetyFeedbackValidator> for SubmitSafetyFeedbackInput {
    fn from(payload: SubmitSafetyFeedbackValidator) -> Self {
        Self {
            safety_level: payload.safety_level,
            checklist: SafetyChecklist {
                temperature_required: payload.temperature_required,
                contact_info_required: payload.contact_info_required,
                employee_mask: payload.employee_mask,
                capacity_compliant: payload.capacity_compliant,
                distance_compliant: payload.distance_compliant,
            },
        }
    }
}
