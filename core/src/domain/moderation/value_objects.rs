use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::moderation::entities::{ModerationDecision, ReportTarget};

#[derive(Debug, Clone)]
pub struct ReportContentInput {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModerationOutcome {
    pub target: ReportTarget,
    pub target_id: Uuid,
    pub decision: ModerationDecision,
    pub closed_reports: u64,
}
