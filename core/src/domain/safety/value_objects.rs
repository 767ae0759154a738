use serde::Deserialize;

use crate::domain::safety::entities::SafetyChecklist;

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitSafetyFeedbackInput {
    pub safety_level: i32,
    pub checklist: SafetyChecklist,
}
