use crate::{
    domain::common::{DineSafelyConfig, services::Service},
    infrastructure::{
        activity::repositories::activity_log_repository::PostgresActivityLogRepository,
        community::repositories::question_repository::PostgresQuestionRepository,
        covid::nyc_health_client::CsvCovidZoneClient,
        crypto::argon2_hasher::Argon2HasherRepository,
        db::postgres::{Postgres, PostgresConfig},
        favorite::repositories::favorite_repository::PostgresFavoriteRepository,
        health::repositories::health_check_repository::PostgresHealthCheckRepository,
        inspection::socrata_client::SocrataInspectionClient,
        jwt::hs256_verifier::Hs256TokenVerifier,
        metadata::yelp_client::YelpMetadataClient,
        moderation::repositories::report_repository::PostgresReportRepository,
        notifier::tracing_notifier::TracingModerationNotifier,
        random::ConfiguredRandomSource,
        restaurant::repositories::restaurant_repository::PostgresRestaurantRepository,
        review::repositories::{
            comment_repository::PostgresCommentRepository,
            review_repository::PostgresReviewRepository,
        },
        safety::repositories::safety_feedback_repository::PostgresSafetyFeedbackRepository,
        user::repositories::user_repository::PostgresUserRepository,
    },
};

const DATABASE_MAX_CONNECTIONS: u32 = 10;

pub type DineSafelyService = Service<
    PostgresRestaurantRepository,
    PostgresReviewRepository,
    PostgresCommentRepository,
    PostgresQuestionRepository,
    PostgresActivityLogRepository,
    PostgresFavoriteRepository,
    PostgresReportRepository,
    PostgresUserRepository,
    Argon2HasherRepository,
    PostgresHealthCheckRepository,
    YelpMetadataClient,
    SocrataInspectionClient,
    Hs256TokenVerifier,
    ConfiguredRandomSource,
    TracingModerationNotifier,
    CsvCovidZoneClient,
    PostgresSafetyFeedbackRepository,
>;

pub async fn create_service(config: DineSafelyConfig) -> Result<DineSafelyService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
        max_connections: DATABASE_MAX_CONNECTIONS,
    })
    .await?;
    let db = postgres.get_db();

    Ok(Service {
        restaurant_repository: PostgresRestaurantRepository::new(db.clone()),
        review_repository: PostgresReviewRepository::new(db.clone()),
        comment_repository: PostgresCommentRepository::new(db.clone()),
        question_repository: PostgresQuestionRepository::new(db.clone()),
        activity_log_repository: PostgresActivityLogRepository::new(db.clone()),
        favorite_repository: PostgresFavoriteRepository::new(db.clone()),
        report_repository: PostgresReportRepository::new(db.clone()),
        user_repository: PostgresUserRepository::new(db.clone()),
        safety_feedback_repository: PostgresSafetyFeedbackRepository::new(db.clone()),
        hasher_repository: Argon2HasherRepository::new(),
        health_check_repository: PostgresHealthCheckRepository::new(db),
        metadata_client: YelpMetadataClient::new(&config.metadata)?,
        inspection_client: SocrataInspectionClient::new(&config.inspection)?,
        token_verifier: Hs256TokenVerifier::new(&config.auth.jwt_secret),
        random_source: ConfiguredRandomSource::from_seed(config.chatbot.seed),
        moderation_notifier: TracingModerationNotifier::new(),
        covid_zone_client: CsvCovidZoneClient::new(&config.covid)?,
    })
}
