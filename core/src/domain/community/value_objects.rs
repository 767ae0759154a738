use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::community::entities::{AnswerView, QuestionView};

/// Questions shown on the restaurant profile.
pub const PROFILE_QUESTION_PREVIEW: u64 = 3;
/// Answers shown under each listed question.
pub const ANSWER_PREVIEW: u64 = 2;
pub const QUESTIONS_PAGE_SIZE: u64 = 10;
pub const ANSWERS_PAGE_SIZE: u64 = 10;

#[derive(Debug, Clone)]
pub struct AskQuestionInput {
    pub question: String,
}

#[derive(Debug, Clone)]
pub struct AnswerQuestionInput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionPage {
    pub items: Vec<QuestionView>,
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnswerPage {
    pub items: Vec<AnswerView>,
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
}

/// Offset of a 1-based page. Page 0 is read as page 1.
pub fn page_offset(page: u64, page_size: u64) -> u64 {
    page.max(1).saturating_sub(1).saturating_mul(page_size)
}
