use crate::application::http::{
    community::router::CommunityApiDoc, health::router::HealthApiDoc,
    moderation::router::ModerationApiDoc, restaurant::router::RestaurantApiDoc,
    review::router::ReviewApiDoc, safety::router::SafetyApiDoc, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DineSafely API",
        description = "Restaurant inspections, reviews and recommendations"
    ),
    tags(
        (name = "restaurant", description = "Search, profiles, recommendations and favorites"),
        (name = "review", description = "Reviews, comments and likes"),
        (name = "community", description = "Questions, answers and FAQs"),
        (name = "safety", description = "COVID-19 safety questionnaire"),
        (name = "moderation", description = "Content reports and staff moderation"),
        (name = "user", description = "Registration and preferences"),
        (name = "health", description = "Liveness and readiness"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// The merged document of every area, with paths prefixed by `root_path`.
    pub fn with_root_path(root_path: &str) -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(RestaurantApiDoc::openapi());
        openapi.merge(ReviewApiDoc::openapi());
        openapi.merge(CommunityApiDoc::openapi());
        openapi.merge(SafetyApiDoc::openapi());
        openapi.merge(ModerationApiDoc::openapi());
        openapi.merge(UserApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());

        let mut paths = openapi.paths.clone();
        paths.paths = openapi
            .paths
            .paths
            .into_iter()
            .map(|(path, item)| (format!("{root_path}{path}"), item))
            .collect();
        openapi.paths = paths;

        openapi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_area_is_documented() {
        let openapi = ApiDoc::with_root_path("");
        let paths: Vec<&String> = openapi.paths.paths.keys().collect();

        for expected in [
            "/restaurants",
            "/restaurants/{restaurant_id}/profile",
            "/chatbot/recommendations",
            "/reviews/{review_id}/like",
            "/questions/{question_id}/answers",
            "/faqs",
            "/restaurants/{restaurant_id}/safety-feedback",
            "/moderation/reviews/{review_id}/{decision}",
            "/users",
            "/health/ready",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }

    #[test]
    fn test_root_path_prefix() {
        let openapi = ApiDoc::with_root_path("/api");
        assert!(openapi.paths.paths.keys().all(|p| p.starts_with("/api/")));
    }
}
