use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_timestamp};

pub const MIN_SAFETY_LEVEL: i32 = 1;
pub const MAX_SAFETY_LEVEL: i32 = 5;

/// Yes/no answers of the COVID-19 safety questionnaire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SafetyChecklist {
    pub temperature_required: bool,
    pub contact_info_required: bool,
    pub employee_mask: bool,
    pub capacity_compliant: bool,
    pub distance_compliant: bool,
}

/// One questionnaire submitted for a restaurant. Anonymous visitors may
/// answer it too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SafetyFeedback {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub user_id: Option<Uuid>,
    pub safety_level: i32,
    #[serde(flatten)]
    pub checklist: SafetyChecklist,
    pub created_at: DateTime<Utc>,
}

impl SafetyFeedback {
    pub fn new(
        restaurant_id: Uuid,
        user_id: Option<Uuid>,
        safety_level: i32,
        checklist: SafetyChecklist,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            restaurant_id,
            user_id,
            safety_level,
            checklist,
            created_at: now,
        }
    }
}

pub fn validate_safety_level(value: i32) -> Result<(), CoreError> {
    if (MIN_SAFETY_LEVEL..=MAX_SAFETY_LEVEL).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::InputError(format!(
            "safety_level must be between {MIN_SAFETY_LEVEL} and {MAX_SAFETY_LEVEL}, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_level_bounds() {
        assert!(validate_safety_level(1).is_ok());
        assert!(validate_safety_level(5).is_ok());
        assert!(matches!(validate_safety_level(0), Err(CoreError::InputError(_))));
        assert!(matches!(validate_safety_level(6), Err(CoreError::InputError(_))));
    }

    #[test]
    fn test_checklist_is_flattened() {
        let feedback = SafetyFeedback::new(
            Uuid::new_v4(),
            None,
            4,
            SafetyChecklist {
                employee_mask: true,
                ..Default::default()
            },
        );

        let json = serde_json::to_value(&feedback).unwrap();
        assert_eq!(json["employee_mask"], true);
        assert_eq!(json["capacity_compliant"], false);
        assert!(json["user_id"].is_null());
    }
}
