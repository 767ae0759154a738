use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    activity::ports::ActivityLogRepository,
    authentication::{ports::TokenVerifier, value_objects::Identity},
    common::{
        entities::app_errors::CoreError,
        policies::{can_moderate, ensure_policy},
        services::Service,
    },
    community::ports::QuestionRepository,
    favorite::ports::FavoriteRepository,
    health::ports::HealthCheckRepository,
    moderation::{
        entities::{ModerationDecision, ModerationNotice, Report, ReportTarget},
        ports::{ModerationNotifier, ModerationService, ReportRepository},
        value_objects::{ModerationOutcome, ReportContentInput},
    },
    restaurant::ports::{
        CovidZoneClient, InspectionClient, RandomSource, RestaurantMetadataClient,
        RestaurantRepository,
    },
    review::ports::{CommentRepository, ReviewRepository},
    safety::ports::SafetyFeedbackRepository,
    user::ports::{HasherRepository, UserRepository},
};

impl<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF>
    Service<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF>
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
    /// Author of the reported content, `None` when it does not exist.
    async fn content_author(
        &self,
        target: ReportTarget,
        target_id: Uuid,
    ) -> Result<Option<Uuid>, CoreError> {
        let author = match target {
            ReportTarget::Review => self
                .review_repository
                .get_by_id(target_id)
                .await?
                .map(|review| review.user_id),
            ReportTarget::Comment => self
                .comment_repository
                .get_by_id(target_id)
                .await?
                .map(|comment| comment.user_id),
        };

        Ok(author)
    }
}

impl<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF> ModerationService
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
    #[instrument(skip(self, identity, input), fields(reporter_id = %identity.id()))]
    async fn report_content(
        &self,
        identity: Identity,
        target: ReportTarget,
        target_id: Uuid,
        input: ReportContentInput,
    ) -> Result<Report, CoreError> {
        let reason = input.reason.trim();
        if reason.is_empty() {
            return Err(CoreError::InputError("a reason is required".to_string()));
        }

        self.content_author(target, target_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let report = Report::new(target, target_id, identity.id(), reason.to_string());
        let report = self.report_repository.create(report).await?;

        info!(report_id = %report.id, %target, %target_id, "content reported");

        Ok(report)
    }

    #[instrument(skip(self, identity), fields(moderator_id = %identity.id()))]
    async fn moderate_content(
        &self,
        identity: Identity,
        target: ReportTarget,
        target_id: Uuid,
        decision: ModerationDecision,
    ) -> Result<ModerationOutcome, CoreError> {
        ensure_policy(can_moderate(&identity), "only staff can moderate content")?;

        let author_id = self
            .content_author(target, target_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let closed_reports = self.report_repository.close_reports(target, target_id).await?;

        match (decision, target) {
            (ModerationDecision::Hide, ReportTarget::Review) => {
                self.review_repository.set_hidden(target_id, true).await?
            }
            (ModerationDecision::Hide, ReportTarget::Comment) => {
                self.comment_repository.set_hidden(target_id, true).await?
            }
            (ModerationDecision::Delete, ReportTarget::Review) => {
                self.review_repository.delete(target_id).await?
            }
            (ModerationDecision::Delete, ReportTarget::Comment) => {
                self.comment_repository.delete(target_id).await?
            }
            (ModerationDecision::Ignore, _) => {}
        }

        info!(%target, %target_id, %decision, closed_reports, "content moderated");

        let notice = ModerationNotice {
            recipient_id: author_id,
            moderator_id: identity.id(),
            target,
            target_id,
            decision,
        };
        if let Err(e) = self.moderation_notifier.notify(notice).await {
            warn!("Failed to notify author {} of moderation: {}", author_id, e);
        }

        Ok(ModerationOutcome {
            target,
            target_id,
            decision,
            closed_reports,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::{Mocks, identity},
        review::entities::{Comment, Review, ReviewConfig, SubRatings},
    };

    fn review_by(user_id: Uuid) -> Review {
        Review::new(ReviewConfig {
            restaurant_id: Uuid::new_v4(),
            user_id,
            rating: 1,
            sub_ratings: SubRatings {
                safety: 1,
                entry: 1,
                door: 1,
                table: 1,
                bathroom: 1,
                path: 1,
            },
            content: Some("spam".to_string()),
            images: [None, None, None],
        })
    }

    fn expect_review(mocks: &mut Mocks, review: Review) {
        mocks.review_repository.expect_get_by_id().returning(move |_| {
            let review = review.clone();
            Box::pin(async move { Ok(Some(review)) })
        });
    }

    #[tokio::test]
    async fn test_non_staff_cannot_moderate() {
        let mut mocks = Mocks::default();
        mocks.report_repository.expect_close_reports().never();

        let err = mocks
            .into_service()
            .moderate_content(
                identity(false),
                ReportTarget::Review,
                Uuid::new_v4(),
                ModerationDecision::Hide,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_hide_review_closes_reports_and_notifies_author() {
        let author_id = Uuid::new_v4();
        let review = review_by(author_id);
        let review_id = review.id;

        let mut mocks = Mocks::default();
        expect_review(&mut mocks, review);
        mocks
            .report_repository
            .expect_close_reports()
            .withf(move |target, id| *target == ReportTarget::Review && *id == review_id)
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(2) }));
        mocks
            .review_repository
            .expect_set_hidden()
            .withf(move |id, hidden| *id == review_id && *hidden)
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        mocks.review_repository.expect_delete().never();
        mocks
            .moderation_notifier
            .expect_notify()
            .withf(move |notice| {
                notice.recipient_id == author_id && notice.decision == ModerationDecision::Hide
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let outcome = mocks
            .into_service()
            .moderate_content(
                identity(true),
                ReportTarget::Review,
                review_id,
                ModerationDecision::Hide,
            )
            .await
            .unwrap();

        assert_eq!(outcome.closed_reports, 2);
    }

    #[tokio::test]
    async fn test_delete_comment_removes_it() {
        let comment = Comment::new(Uuid::new_v4(), Uuid::new_v4(), "rude".to_string());
        let comment_id = comment.id;

        let mut mocks = Mocks::default();
        mocks.comment_repository.expect_get_by_id().returning(move |_| {
            let comment = comment.clone();
            Box::pin(async move { Ok(Some(comment)) })
        });
        mocks
            .report_repository
            .expect_close_reports()
            .returning(|_, _| Box::pin(async { Ok(1) }));
        mocks
            .comment_repository
            .expect_delete()
            .withf(move |id| *id == comment_id)
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        mocks
            .moderation_notifier
            .expect_notify()
            .returning(|_| Box::pin(async { Ok(()) }));

        let outcome = mocks
            .into_service()
            .moderate_content(
                identity(true),
                ReportTarget::Comment,
                comment_id,
                ModerationDecision::Delete,
            )
            .await
            .unwrap();

        assert_eq!(outcome.decision, ModerationDecision::Delete);
    }

    #[tokio::test]
    async fn test_ignore_keeps_content_even_if_notifier_fails() {
        let review = review_by(Uuid::new_v4());
        let review_id = review.id;

        let mut mocks = Mocks::default();
        expect_review(&mut mocks, review);
        mocks
            .report_repository
            .expect_close_reports()
            .returning(|_, _| Box::pin(async { Ok(1) }));
        mocks.review_repository.expect_set_hidden().never();
        mocks.review_repository.expect_delete().never();
        mocks
            .moderation_notifier
            .expect_notify()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let outcome = mocks
            .into_service()
            .moderate_content(
                identity(true),
                ReportTarget::Review,
                review_id,
                ModerationDecision::Ignore,
            )
            .await
            .unwrap();

        assert_eq!(outcome.closed_reports, 1);
    }

    #[tokio::test]
    async fn test_moderating_missing_content_is_not_found() {
        let mut mocks = Mocks::default();
        mocks
            .review_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks.report_repository.expect_close_reports().never();

        let err = mocks
            .into_service()
            .moderate_content(
                identity(true),
                ReportTarget::Review,
                Uuid::new_v4(),
                ModerationDecision::Delete,
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_report_requires_reason() {
        let mut mocks = Mocks::default();
        mocks.report_repository.expect_create().never();

        let err = mocks
            .into_service()
            .report_content(
                identity(false),
                ReportTarget::Review,
                Uuid::new_v4(),
                ReportContentInput {
                    reason: " ".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InputError(_)));
    }
}
