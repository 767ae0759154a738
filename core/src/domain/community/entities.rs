use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, user::entities::AuthorSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Question {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub user_id: Uuid,
    pub question: String,
    pub created_at: DateTime<Utc>,
}

impl Question {
    pub fn new(restaurant_id: Uuid, user_id: Uuid, question: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            restaurant_id,
            user_id,
            question,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Answer {
    pub id: Uuid,
    pub question_id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Answer {
    pub fn new(question_id: Uuid, user_id: Uuid, text: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            question_id,
            user_id,
            text,
            created_at: now,
        }
    }
}

/// Site-wide frequently asked question, maintained by staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnswerView {
    #[serde(flatten)]
    pub answer: Answer,
    pub author: AuthorSummary,
}

/// A question with a preview of its latest answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionView {
    #[serde(flatten)]
    pub question: Question,
    pub author: AuthorSummary,
    pub answers: Vec<AnswerView>,
    pub total_answers_count: u64,
}
