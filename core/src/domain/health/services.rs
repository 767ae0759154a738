use crate::domain::{
    activity::ports::ActivityLogRepository,
    authentication::ports::TokenVerifier,
    common::{entities::app_errors::CoreError, services::Service},
    community::ports::QuestionRepository,
    favorite::ports::FavoriteRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    moderation::ports::{ModerationNotifier, ReportRepository},
    restaurant::ports::{
        CovidZoneClient, InspectionClient, RandomSource, RestaurantMetadataClient,
        RestaurantRepository,
    },
    review::ports::{CommentRepository, ReviewRepository},
    safety::ports::SafetyFeedbackRepository,
    user::ports::{HasherRepository, UserRepository},
};

impl<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF> HealthCheckService
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
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
