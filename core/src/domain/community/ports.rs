use std::{collections::HashMap, future::Future};

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    community::{
        entities::{Answer, Faq, Question},
        value_objects::{AnswerPage, AnswerQuestionInput, AskQuestionInput, QuestionPage},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait CommunityService: Send + Sync {
    fn list_questions(
        &self,
        restaurant_id: Uuid,
        page: u64,
    ) -> impl Future<Output = Result<QuestionPage, CoreError>> + Send;

    fn ask_question(
        &self,
        identity: Identity,
        restaurant_id: Uuid,
        input: AskQuestionInput,
    ) -> impl Future<Output = Result<Question, CoreError>> + Send;

    fn list_answers(
        &self,
        question_id: Uuid,
        page: u64,
    ) -> impl Future<Output = Result<AnswerPage, CoreError>> + Send;

    fn answer_question(
        &self,
        identity: Identity,
        question_id: Uuid,
        input: AnswerQuestionInput,
    ) -> impl Future<Output = Result<Answer, CoreError>> + Send;

    fn list_faqs(&self) -> impl Future<Output = Result<Vec<Faq>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait QuestionRepository: Send + Sync {
    fn create_question(
        &self,
        question: Question,
    ) -> impl Future<Output = Result<Question, CoreError>> + Send;

    fn get_question(
        &self,
        question_id: Uuid,
    ) -> impl Future<Output = Result<Option<Question>, CoreError>> + Send;

    /// Questions of the restaurant, newest first.
    fn list_questions(
        &self,
        restaurant_id: Uuid,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Question>, CoreError>> + Send;

    fn count_questions(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn create_answer(&self, answer: Answer)
    -> impl Future<Output = Result<Answer, CoreError>> + Send;

    /// Answers of the question, newest first.
    fn list_answers(
        &self,
        question_id: Uuid,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Answer>, CoreError>> + Send;

    /// Up to `per_question` newest answers of each question.
    fn latest_answers(
        &self,
        question_ids: Vec<Uuid>,
        per_question: u64,
    ) -> impl Future<Output = Result<Vec<Answer>, CoreError>> + Send;

    fn count_answers(
        &self,
        question_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<HashMap<Uuid, u64>, CoreError>> + Send;

    /// Every FAQ entry, by ascending position.
    fn list_faqs(&self) -> impl Future<Output = Result<Vec<Faq>, CoreError>> + Send;
}
