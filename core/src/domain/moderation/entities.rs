use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Kind of content a report points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportTarget {
    Review,
    Comment,
}

impl ReportTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportTarget::Review => "REVIEW",
            ReportTarget::Comment => "COMMENT",
        }
    }
}

impl fmt::Display for ReportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportTarget {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "REVIEW" => Ok(ReportTarget::Review),
            "COMMENT" => Ok(ReportTarget::Comment),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ModerationDecision {
    /// Hide the content and close its reports.
    Hide,
    /// Close the reports and leave the content as is.
    Ignore,
    /// Close the reports and delete the content.
    Delete,
}

impl ModerationDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationDecision::Hide => "hide",
            ModerationDecision::Ignore => "ignore",
            ModerationDecision::Delete => "delete",
        }
    }
}

impl fmt::Display for ModerationDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModerationDecision {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hide" => Ok(ModerationDecision::Hide),
            "ignore" => Ok(ModerationDecision::Ignore),
            "delete" => Ok(ModerationDecision::Delete),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Report {
    pub id: Uuid,
    pub target: ReportTarget,
    pub target_id: Uuid,
    pub reporter_id: Uuid,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl Report {
    pub fn new(target: ReportTarget, target_id: Uuid, reporter_id: Uuid, reason: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            target,
            target_id,
            reporter_id,
            reason,
            created_at: now,
        }
    }
}

/// Sent to the author of moderated content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationNotice {
    pub recipient_id: Uuid,
    pub moderator_id: Uuid,
    pub target: ReportTarget,
    pub target_id: Uuid,
    pub decision: ModerationDecision,
}
