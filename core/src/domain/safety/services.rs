use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    activity::ports::ActivityLogRepository,
    authentication::{ports::TokenVerifier, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    community::ports::QuestionRepository,
    favorite::ports::FavoriteRepository,
    health::ports::HealthCheckRepository,
    moderation::ports::{ModerationNotifier, ReportRepository},
    restaurant::ports::{
        CovidZoneClient, InspectionClient, RandomSource, RestaurantMetadataClient,
        RestaurantRepository,
    },
    review::ports::{CommentRepository, ReviewRepository},
    safety::{
        aggregator::{SafetyFeedbackSummary, summarize_feedback},
        entities::{SafetyFeedback, validate_safety_level},
        ports::{SafetyFeedbackRepository, SafetyFeedbackService},
        value_objects::SubmitSafetyFeedbackInput,
    },
    user::ports::{HasherRepository, UserRepository},
};

impl<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF> SafetyFeedbackService
    for Service<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF>
where
    RE: RestaurantRepository,
    RV: ReviewRepository,
    CM: CommentRepository,
    QA: QuestionRepository,
    AL: ActivityLogRepository,
    FV: FavoriteRepository,
    RP: ReportRepository,
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    MC: RestaurantMetadataClient,
    IC: InspectionClient,
    TV: TokenVerifier,
    RS: RandomSource,
    MN: ModerationNotifier,
    CZ: CovidZoneClient,
    SF: SafetyFeedbackRepository,
{
    #[instrument(skip(self, identity, input), fields(safety_level = input.safety_level))]
    async fn submit_safety_feedback(
        &self,
        identity: Option<Identity>,
        restaurant_id: Uuid,
        input: SubmitSafetyFeedbackInput,
    ) -> Result<SafetyFeedback, CoreError> {
        validate_safety_level(input.safety_level)?;

        self.restaurant_repository
            .get_by_id(restaurant_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let feedback = SafetyFeedback::new(
            restaurant_id,
            identity.map(|i| i.id()),
            input.safety_level,
            input.checklist,
        );

        self.safety_feedback_repository.create(feedback).await
    }

    async fn get_safety_summary(
        &self,
        restaurant_id: Uuid,
    ) -> Result<SafetyFeedbackSummary, CoreError> {
        self.restaurant_repository
            .get_by_id(restaurant_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let feedback = self
            .safety_feedback_repository
            .fetch_for_restaurant(restaurant_id)
            .await?;

        Ok(summarize_feedback(&feedback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::{Mocks, identity, sample_restaurant},
        safety::entities::SafetyChecklist,
    };

    fn input(safety_level: i32) -> SubmitSafetyFeedbackInput {
        SubmitSafetyFeedbackInput {
            safety_level,
            checklist: SafetyChecklist {
                employee_mask: true,
                distance_compliant: true,
                ..Default::default()
            },
        }
    }

    fn expect_restaurant(mocks: &mut Mocks) {
        let restaurant = sample_restaurant();
        mocks.restaurant_repository.expect_get_by_id().returning(move |_| {
            let restaurant = restaurant.clone();
            Box::pin(async move { Ok(Some(restaurant)) })
        });
    }

    #[tokio::test]
    async fn test_signed_in_submission_records_author() {
        let caller = identity(false);
        let caller_id = caller.user_id;
        let restaurant_id = Uuid::new_v4();

        let mut mocks = Mocks::default();
        expect_restaurant(&mut mocks);
        mocks
            .safety_feedback_repository
            .expect_create()
            .withf(move |f| {
                f.user_id == Some(caller_id)
                    && f.restaurant_id == restaurant_id
                    && f.safety_level == 4
                    && f.checklist.employee_mask
            })
            .times(1)
            .returning(|f| Box::pin(async move { Ok(f) }));

        let feedback = mocks
            .into_service()
            .submit_safety_feedback(Some(caller), restaurant_id, input(4))
            .await
            .unwrap();

        assert_eq!(feedback.user_id, Some(caller_id));
    }

    #[tokio::test]
    async fn test_anonymous_submission_is_accepted() {
        let mut mocks = Mocks::default();
        expect_restaurant(&mut mocks);
        mocks
            .safety_feedback_repository
            .expect_create()
            .withf(|f| f.user_id.is_none())
            .times(1)
            .returning(|f| Box::pin(async move { Ok(f) }));

        let feedback = mocks
            .into_service()
            .submit_safety_feedback(None, Uuid::new_v4(), input(1))
            .await
            .unwrap();

        assert_eq!(feedback.safety_level, 1);
    }

    #[tokio::test]
    async fn test_out_of_range_level_is_rejected_before_lookup() {
        let mut mocks = Mocks::default();
        mocks.restaurant_repository.expect_get_by_id().never();
        mocks.safety_feedback_repository.expect_create().never();

        let err = mocks
            .into_service()
            .submit_safety_feedback(None, Uuid::new_v4(), input(6))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InputError(_)));
    }

    #[tokio::test]
    async fn test_feedback_for_unknown_restaurant() {
        let mut mocks = Mocks::default();
        mocks
            .restaurant_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks.safety_feedback_repository.expect_create().never();

        let err = mocks
            .into_service()
            .submit_safety_feedback(None, Uuid::new_v4(), input(3))
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_summary_aggregates_stored_feedback() {
        let restaurant_id = Uuid::new_v4();

        let mut mocks = Mocks::default();
        expect_restaurant(&mut mocks);
        mocks
            .safety_feedback_repository
            .expect_fetch_for_restaurant()
            .withf(move |id| *id == restaurant_id)
            .returning(move |_| {
                Box::pin(async move {
                    Ok(vec![
                        SafetyFeedback::new(restaurant_id, None, 2, SafetyChecklist::default()),
                        SafetyFeedback::new(restaurant_id, None, 5, SafetyChecklist::default()),
                    ])
                })
            });

        let summary = mocks
            .into_service()
            .get_safety_summary(restaurant_id)
            .await
            .unwrap();

        assert_eq!(summary.statistics.responses, 2);
        assert_eq!(summary.average_safety_rating, Some(3.5));
        assert!(summary.latest_feedback.is_some());
    }
}
