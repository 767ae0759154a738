use dinesafely_core::domain::community::value_objects::{AnswerQuestionInput, AskQuestionInput};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AskQuestionValidator {
    #[validate(length(min = 1, max = 1000, message = "question must be 1 to 1000 characters"))]
    pub question: String,
}

impl From<AskQuestionValidator> for AskQuestionInput {
    fn from(payload: AskQuestionValidator) -> Self {
        Self {
            question: payload.question,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnswerQuestionValidator {
    #[validate(length(min = 1, max = 1000, message = "text must be 1 to 1000 characters"))]
    pub text: String,
}

impl From<AnswerQuestionValidator> for AnswerQuestionInput {
    fn from(payload: AnswerQuestionValidator) -> Self {
        Self { text: payload.text }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQuery {
    /// 1-based page number.
    pub page: Option<u64>,
}

impl PageQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1)
    }
}
