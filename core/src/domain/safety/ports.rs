use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    safety::{
        aggregator::SafetyFeedbackSummary, entities::SafetyFeedback,
        value_objects::SubmitSafetyFeedbackInput,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait SafetyFeedbackService: Send + Sync {
    fn submit_safety_feedback(
        &self,
        identity: Option<Identity>,
        restaurant_id: Uuid,
        input: SubmitSafetyFeedbackInput,
    ) -> impl Future<Output = Result<SafetyFeedback, CoreError>> + Send;

    fn get_safety_summary(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<SafetyFeedbackSummary, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SafetyFeedbackRepository: Send + Sync {
    fn create(
        &self,
        feedback: SafetyFeedback,
    ) -> impl Future<Output = Result<SafetyFeedback, CoreError>> + Send;

    fn fetch_for_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Vec<SafetyFeedback>, CoreError>> + Send;
}
