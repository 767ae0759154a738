use std::str::FromStr;

use dinesafely_core::domain::moderation::{
    entities::ModerationDecision, value_objects::ReportContentInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReportContentValidator {
    #[validate(length(min = 1, max = 500, message = "reason must be 1 to 500 characters"))]
    pub reason: String,
}

impl From<ReportContentValidator> for ReportContentInput {
    fn from(payload: ReportContentValidator) -> Self {
        Self {
            reason: payload.reason,
        }
    }
}

pub fn parse_decision(raw: &str) -> Result<ModerationDecision, ApiError> {
    ModerationDecision::from_str(raw).map_err(|_| {
        ApiError::BadRequest(format!(
            "unknown moderation decision '{raw}', expected hide, ignore or delete"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decision() {
        assert_eq!(parse_decision("hide"), Ok(ModerationDecision::Hide));
        assert_eq!(parse_decision("ignore"), Ok(ModerationDecision::Ignore));
        assert_eq!(parse_decision("delete"), Ok(ModerationDecision::Delete));
        assert!(matches!(parse_decision("ban"), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_reason_required() {
        let payload = ReportContentValidator {
            reason: String::new(),
        };
        assert!(payload.validate().is_err());
    }
}
