//! Mocked `Service` used by the service unit tests.

use uuid::Uuid;

use crate::domain::{
    activity::ports::MockActivityLogRepository,
    authentication::{ports::MockTokenVerifier, value_objects::Identity},
    common::services::Service,
    community::ports::MockQuestionRepository,
    favorite::ports::MockFavoriteRepository,
    health::ports::MockHealthCheckRepository,
    moderation::ports::{MockModerationNotifier, MockReportRepository},
    restaurant::{
        entities::{ComplianceStatus, Restaurant, RestaurantConfig},
        ports::{
            MockCovidZoneClient, MockInspectionClient, MockRandomSource,
            MockRestaurantMetadataClient, MockRestaurantRepository,
        },
    },
    review::ports::{MockCommentRepository, MockReviewRepository},
    safety::ports::MockSafetyFeedbackRepository,
    user::ports::{MockHasherRepository, MockUserRepository},
};

pub type TestService = Service<
    MockRestaurantRepository,
    MockReviewRepository,
    MockCommentRepository,
    MockQuestionRepository,
    MockActivityLogRepository,
    MockFavoriteRepository,
    MockReportRepository,
    MockUserRepository,
    MockHasherRepository,
    MockHealthCheckRepository,
    MockRestaurantMetadataClient,
    MockInspectionClient,
    MockTokenVerifier,
    MockRandomSource,
    MockModerationNotifier,
    MockCovidZoneClient,
    MockSafetyFeedbackRepository,
>;

#[derive(Default)]
pub struct Mocks {
    pub restaurant_repository: MockRestaurantRepository,
    pub review_repository: MockReviewRepository,
    pub comment_repository: MockCommentRepository,
    pub question_repository: MockQuestionRepository,
    pub activity_log_repository: MockActivityLogRepository,
    pub favorite_repository: MockFavoriteRepository,
    pub report_repository: MockReportRepository,
    pub user_repository: MockUserRepository,
    pub hasher_repository: MockHasherRepository,
    pub health_check_repository: MockHealthCheckRepository,
    pub metadata_client: MockRestaurantMetadataClient,
    pub inspection_client: MockInspectionClient,
    pub token_verifier: MockTokenVerifier,
    pub random_source: MockRandomSource,
    pub moderation_notifier: MockModerationNotifier,
    pub covid_zone_client: MockCovidZoneClient,
    pub safety_feedback_repository: MockSafetyFeedbackRepository,
}

impl Mocks {
    pub fn into_service(self) -> TestService {
        Service {
            restaurant_repository: self.restaurant_repository,
            review_repository: self.review_repository,
            comment_repository: self.comment_repository,
            question_repository: self.question_repository,
            activity_log_repository: self.activity_log_repository,
            favorite_repository: self.favorite_repository,
            report_repository: self.report_repository,
            user_repository: self.user_repository,
            hasher_repository: self.hasher_repository,
            health_check_repository: self.health_check_repository,
            metadata_client: self.metadata_client,
            inspection_client: self.inspection_client,
            token_verifier: self.token_verifier,
            random_source: self.random_source,
            moderation_notifier: self.moderation_notifier,
            covid_zone_client: self.covid_zone_client,
            safety_feedback_repository: self.safety_feedback_repository,
        }
    }
}

pub fn identity(is_staff: bool) -> Identity {
    Identity {
        user_id: Uuid::new_v4(),
        username: if is_staff { "staff" } else { "diner" }.to_string(),
        is_staff,
    }
}

pub fn sample_restaurant() -> Restaurant {
    Restaurant::new(RestaurantConfig {
        business_id: "joes-pizza-new-york".to_string(),
        name: "Joe's Pizza".to_string(),
        address: "7 Carmine St".to_string(),
        postcode: "10014".to_string(),
        compliance: ComplianceStatus::Compliant,
        neighborhood: Some("Chelsea".to_string()),
        categories: vec!["pizza".to_string()],
        rating: Some(4.5),
        price: Some("$".to_string()),
    })
}
