use std::collections::HashSet;

use tracing::{instrument, warn};
use uuid::Uuid;

use crate::domain::{
    activity::ports::ActivityLogRepository,
    authentication::{ports::TokenVerifier, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    community::{
        ports::QuestionRepository,
        value_objects::{PROFILE_QUESTION_PREVIEW, page_offset},
    },
    favorite::ports::FavoriteRepository,
    health::ports::HealthCheckRepository,
    moderation::ports::{ModerationNotifier, ReportRepository},
    restaurant::{
        entities::{
            CovidZone, InspectionRecord, Restaurant, RestaurantMetadata, RestaurantSummary,
        },
        ports::{
            CovidZoneClient, InspectionClient, RandomSource, RestaurantMetadataClient,
            RestaurantRepository, RestaurantService,
        },
        recommender::{recommend_similar, similarity_query},
        selector::{select_chatbot_restaurants, validate_chatbot_input},
        value_objects::{
            ChatbotInput, DEFAULT_SIMILAR_LIMIT, MAX_SIMILAR_LIMIT, RestaurantListItem,
            RestaurantPage, RestaurantProfile, RestaurantSearchFilter, SEARCH_PAGE_SIZE,
            SearchRestaurantsInput,
        },
    },
    review::{
        aggregator::aggregate_reviews,
        entities::{Review, ReviewView},
        ports::{CommentRepository, ReviewRepository},
        services::assemble_review_views,
        value_objects::PROFILE_REVIEW_LIMIT,
    },
    safety::{aggregator::summarize_feedback, ports::SafetyFeedbackRepository},
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
    async fn require_restaurant(&self, restaurant_id: Uuid) -> Result<Restaurant, CoreError> {
        self.restaurant_repository
            .get_by_id(restaurant_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn metadata_or_none(&self, restaurant: &Restaurant) -> Option<RestaurantMetadata> {
        match self
            .metadata_client
            .fetch_metadata(restaurant.business_id.clone())
            .await
        {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                warn!(
                    "Failed to fetch metadata for restaurant {}: {}",
                    restaurant.id, e
                );
                None
            }
        }
    }

    async fn inspections_or_empty(&self, restaurant: &Restaurant) -> Vec<InspectionRecord> {
        match self
            .inspection_client
            .fetch_records(
                restaurant.name.clone(),
                restaurant.address.clone(),
                restaurant.postcode.clone(),
            )
            .await
        {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "Failed to fetch inspections for restaurant {}: {}",
                    restaurant.id, e
                );
                Vec::new()
            }
        }
    }

    async fn covid_zone_or_none(&self, restaurant: &Restaurant) -> Option<CovidZone> {
        match self
            .covid_zone_client
            .fetch_zone(restaurant.postcode.clone())
            .await
        {
            Ok(zone) => zone,
            Err(e) => {
                warn!(
                    "Failed to fetch COVID figures for restaurant {}: {}",
                    restaurant.id, e
                );
                None
            }
        }
    }

    /// Similar restaurants, or an empty list when nothing can be matched.
    async fn similar_or_empty(
        &self,
        restaurant: &Restaurant,
        metadata: Option<&RestaurantMetadata>,
        limit: u64,
    ) -> Vec<RestaurantSummary> {
        let Some(query) = similarity_query(restaurant, metadata, limit) else {
            return Vec::new();
        };

        match self.restaurant_repository.find_similar(query).await {
            Ok(candidates) => {
                let limit = usize::try_from(limit).unwrap_or(usize::MAX);
                recommend_similar(candidates, restaurant.id, limit)
            }
            Err(e) => {
                warn!(
                    "Failed to load similar restaurants for {}: {}",
                    restaurant.id, e
                );
                Vec::new()
            }
        }
    }

    async fn review_views(
        &self,
        reviews: Vec<Review>,
        identity: Option<&Identity>,
    ) -> Result<Vec<ReviewView>, CoreError> {
        if reviews.is_empty() {
            return Ok(Vec::new());
        }

        let review_ids: Vec<Uuid> = reviews.iter().map(|r| r.id).collect();
        let (comments, likes) = futures::try_join!(
            self.comment_repository
                .fetch_visible_for_reviews(review_ids.clone()),
            self.review_repository.count_likes(review_ids.clone())
        )?;
        let liked = match identity {
            Some(identity) => {
                self.review_repository
                    .liked_by(review_ids, identity.id())
                    .await?
            }
            None => HashSet::new(),
        };

        let author_ids: HashSet<Uuid> = reviews
            .iter()
            .map(|r| r.user_id)
            .chain(comments.iter().map(|c| c.user_id))
            .collect();
        let authors = self.user_repository.get_authors(author_ids).await?;

        Ok(assemble_review_views(
            reviews, comments, &authors, &likes, &liked,
        ))
    }
}

impl<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF> RestaurantService
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
    #[instrument(skip(self, identity))]
    async fn get_restaurant_profile(
        &self,
        identity: Option<Identity>,
        restaurant_id: Uuid,
    ) -> Result<RestaurantProfile, CoreError> {
        let restaurant = self.require_restaurant(restaurant_id).await?;

        let (metadata, inspections, covid_zone) = tokio::join!(
            self.metadata_or_none(&restaurant),
            self.inspections_or_empty(&restaurant),
            self.covid_zone_or_none(&restaurant)
        );
        let latest_inspection = inspections.into_iter().next();

        let reviews = self
            .review_repository
            .fetch_recent_visible(restaurant_id, PROFILE_REVIEW_LIMIT)
            .await?;
        let stats = aggregate_reviews(&reviews);
        let reviews = self.review_views(reviews, identity.as_ref()).await?;

        let recommended_restaurants = self
            .similar_or_empty(&restaurant, metadata.as_ref(), DEFAULT_SIMILAR_LIMIT)
            .await;

        let (questions, total_question_count) = self
            .question_views(restaurant_id, 0, PROFILE_QUESTION_PREVIEW)
            .await?;

        let safety = summarize_feedback(
            &self
                .safety_feedback_repository
                .fetch_for_restaurant(restaurant_id)
                .await?,
        );

        let saved = match &identity {
            Some(identity) => Some(
                self.favorite_repository
                    .is_favorite(identity.id(), restaurant_id)
                    .await?,
            ),
            None => None,
        };

        if let Some(identity) = &identity
            && let Err(e) = self
                .activity_log_repository
                .record_visit(identity.id(), restaurant_id)
                .await
        {
            warn!(
                "Failed to record visit of user {} to {}: {}",
                identity.id(),
                restaurant_id,
                e
            );
        }

        Ok(RestaurantProfile {
            restaurant,
            metadata,
            latest_inspection,
            covid_zone,
            safety,
            reviews,
            stats,
            recommended_restaurants,
            questions,
            total_question_count,
            saved,
        })
    }

    async fn get_inspection_records(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<InspectionRecord>, CoreError> {
        let restaurant = self.require_restaurant(restaurant_id).await?;

        Ok(self.inspections_or_empty(&restaurant).await)
    }

    async fn get_similar_restaurants(
        &self,
        restaurant_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<RestaurantSummary>, CoreError> {
        let limit = limit.unwrap_or(DEFAULT_SIMILAR_LIMIT);
        if !(1..=MAX_SIMILAR_LIMIT).contains(&limit) {
            return Err(CoreError::InputError(format!(
                "limit must be between 1 and {MAX_SIMILAR_LIMIT}"
            )));
        }

        let restaurant = self.require_restaurant(restaurant_id).await?;
        let metadata = self.metadata_or_none(&restaurant).await;

        Ok(self
            .similar_or_empty(&restaurant, metadata.as_ref(), limit)
            .await)
    }

    #[instrument(skip(self, identity, input), fields(is_preference = input.is_preference))]
    async fn chatbot_recommendations(
        &self,
        identity: Option<Identity>,
        input: ChatbotInput,
    ) -> Result<Vec<RestaurantSummary>, CoreError> {
        let categories = if input.is_preference {
            let identity = identity.ok_or_else(|| {
                CoreError::InputError("preference mode requires a signed-in user".to_string())
            })?;
            Some(self.user_repository.get_preferences(identity.id()).await?)
        } else {
            input.categories
        };

        let query = validate_chatbot_input(categories, input.location)?;
        let candidates = self
            .restaurant_repository
            .find_chatbot_candidates(query)
            .await?;

        Ok(select_chatbot_restaurants(candidates, &self.random_source))
    }

    #[instrument(skip(self, identity))]
    async fn search_restaurants(
        &self,
        identity: Option<Identity>,
        input: SearchRestaurantsInput,
    ) -> Result<RestaurantPage, CoreError> {
        if let Some(min_rating) = input.min_rating
            && !(0.0..=5.0).contains(&min_rating)
        {
            return Err(CoreError::InputError(
                "min_rating must be between 0 and 5".to_string(),
            ));
        }

        let favorites_of = match (&identity, input.favorites_only) {
            (Some(identity), true) => Some(identity.id()),
            (None, true) => return Err(CoreError::Unauthorized),
            (_, false) => None,
        };

        let page = input.page.max(1);
        let filter = RestaurantSearchFilter {
            keyword: input
                .keyword
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            neighborhoods: input.neighborhoods,
            categories: input.categories,
            prices: input.prices,
            min_rating: input.min_rating,
            compliance: input.compliance,
            favorites_of,
            sort: input.sort,
            offset: page_offset(page, SEARCH_PAGE_SIZE),
            limit: SEARCH_PAGE_SIZE,
        };

        let (restaurants, total) = self.restaurant_repository.search(filter).await?;

        let saved = match &identity {
            Some(identity) => Some(
                self.favorite_repository
                    .favorite_ids(identity.id(), restaurants.iter().map(|r| r.id).collect())
                    .await?,
            ),
            None => None,
        };

        let items = restaurants
            .into_iter()
            .map(|restaurant| RestaurantListItem {
                saved_by_user: saved.as_ref().map(|ids| ids.contains(&restaurant.id)),
                restaurant,
            })
            .collect();

        Ok(RestaurantPage {
            items,
            page,
            page_size: SEARCH_PAGE_SIZE,
            total,
        })
    }

    async fn save_favorite(&self, identity: Identity, business_id: String) -> Result<(), CoreError> {
        let restaurant = self
            .restaurant_repository
            .get_by_business_id(business_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.favorite_repository
            .add(identity.id(), restaurant.id)
            .await
    }

    async fn remove_favorite(
        &self,
        identity: Identity,
        business_id: String,
    ) -> Result<(), CoreError> {
        let restaurant = self
            .restaurant_repository
            .get_by_business_id(business_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.favorite_repository
            .remove(identity.id(), restaurant.id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{
        common::test_support::{Mocks, identity, sample_restaurant},
        restaurant::entities::ComplianceStatus,
        review::entities::{ReviewConfig, SubRatings},
        safety::entities::{SafetyChecklist, SafetyFeedback},
    };

    fn summary(id: Uuid) -> RestaurantSummary {
        RestaurantSummary {
            id,
            business_id: format!("biz-{id}"),
            name: "Candidate".to_string(),
            address: "2 Side St".to_string(),
            postcode: "10001".to_string(),
            compliance: ComplianceStatus::Compliant,
            neighborhood: Some("Chelsea".to_string()),
            categories: vec!["pizza".to_string()],
            rating: Some(4.0),
            price: None,
        }
    }

    fn review(restaurant_id: Uuid, rating: i32) -> Review {
        Review::new(ReviewConfig {
            restaurant_id,
            user_id: Uuid::new_v4(),
            rating,
            sub_ratings: SubRatings {
                safety: 3,
                entry: 3,
                door: 3,
                table: 3,
                bathroom: 3,
                path: 3,
            },
            content: None,
            images: [None, None, None],
        })
    }

    fn metadata() -> RestaurantMetadata {
        RestaurantMetadata {
            business_id: "biz".to_string(),
            categories: vec!["pizza".to_string()],
            neighborhood: Some("Chelsea".to_string()),
            rating: Some(4.0),
            price: Some("$$".to_string()),
            review_count: Some(120),
            image_url: None,
            url: None,
            phone: None,
        }
    }

    fn inspection(day: u32, grade: &str) -> InspectionRecord {
        InspectionRecord {
            inspection_date: NaiveDate::from_ymd_opt(2024, 5, day)
                .and_then(|d| d.and_hms_opt(0, 0, 0)),
            action: None,
            violation_code: None,
            violation_description: None,
            critical_flag: None,
            score: Some(10),
            grade: Some(grade.to_string()),
        }
    }

    fn covid_zone() -> CovidZone {
        CovidZone {
            zcta: "10014".to_string(),
            name: "West Village".to_string(),
            percent_positivity_7day: Some(0.82),
            people_tested: Some(3045),
            people_positive: Some(25),
            median_daily_test_rate: Some(143.2),
            adequately_tested: Some("Yes".to_string()),
        }
    }

    /// Restaurant lookup plus community data, shared by the profile tests.
    fn expect_profile_basics(
        mocks: &mut Mocks,
        restaurant: Restaurant,
        feedback: Vec<SafetyFeedback>,
    ) {
        mocks.restaurant_repository.expect_get_by_id().returning(move |_| {
            let restaurant = restaurant.clone();
            Box::pin(async move { Ok(Some(restaurant)) })
        });
        mocks
            .question_repository
            .expect_count_questions()
            .returning(|_| Box::pin(async { Ok(0) }));
        mocks
            .question_repository
            .expect_list_questions()
            .returning(|_, _, _| Box::pin(async { Ok(Vec::new()) }));
        mocks
            .safety_feedback_repository
            .expect_fetch_for_restaurant()
            .returning(move |_| {
                let feedback = feedback.clone();
                Box::pin(async move { Ok(feedback) })
            });
    }

    fn expect_failing_upstreams(mocks: &mut Mocks) {
        mocks.metadata_client.expect_fetch_metadata().returning(|_| {
            Box::pin(async { Err(CoreError::UpstreamUnavailable("timeout".to_string())) })
        });
        mocks.inspection_client.expect_fetch_records().returning(|_, _, _| {
            Box::pin(async { Err(CoreError::UpstreamUnavailable("503".to_string())) })
        });
        mocks.covid_zone_client.expect_fetch_zone().returning(|_| {
            Box::pin(async { Err(CoreError::UpstreamUnavailable("csv".to_string())) })
        });
    }

    #[tokio::test]
    async fn test_profile_of_missing_restaurant() {
        let mut mocks = Mocks::default();
        mocks
            .restaurant_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let err = mocks
            .into_service()
            .get_restaurant_profile(None, Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_profile_survives_upstream_failures() {
        let restaurant = sample_restaurant();
        let restaurant_id = restaurant.id;

        let mut mocks = Mocks::default();
        expect_profile_basics(&mut mocks, restaurant, Vec::new());
        expect_failing_upstreams(&mut mocks);
        mocks
            .review_repository
            .expect_fetch_recent_visible()
            .withf(|_, limit| *limit == 50)
            .returning(move |_, _| {
                Box::pin(async move {
                    Ok(vec![
                        review(restaurant_id, 5),
                        review(restaurant_id, 5),
                        review(restaurant_id, 1),
                    ])
                })
            });
        mocks
            .comment_repository
            .expect_fetch_visible_for_reviews()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));
        mocks
            .review_repository
            .expect_count_likes()
            .returning(|_| Box::pin(async { Ok(HashMap::new()) }));
        mocks.review_repository.expect_liked_by().never();
        mocks
            .user_repository
            .expect_get_authors()
            .returning(|_| Box::pin(async { Ok(HashMap::new()) }));
        mocks.restaurant_repository.expect_find_similar().never();
        mocks.activity_log_repository.expect_record_visit().never();

        let profile = mocks
            .into_service()
            .get_restaurant_profile(None, restaurant_id)
            .await
            .unwrap();

        assert!(profile.metadata.is_none());
        assert!(profile.latest_inspection.is_none());
        assert!(profile.covid_zone.is_none());
        assert!(profile.safety.latest_feedback.is_none());
        assert!(profile.recommended_restaurants.is_empty());
        assert_eq!(profile.reviews.len(), 3);
        assert_eq!(profile.stats.reviews_count, 3);
        assert!((profile.stats.ratings_avg - 3.67).abs() < 0.01);
        assert_eq!(profile.saved, None);
    }

    #[tokio::test]
    async fn test_profile_recommends_and_records_visit() {
        let restaurant = sample_restaurant();
        let restaurant_id = restaurant.id;
        let other = Uuid::new_v4();
        let caller = identity(false);
        let caller_id = caller.user_id;

        let feedback = vec![
            SafetyFeedback::new(restaurant_id, None, 5, SafetyChecklist::default()),
            SafetyFeedback::new(
                restaurant_id,
                Some(caller_id),
                3,
                SafetyChecklist {
                    employee_mask: true,
                    ..Default::default()
                },
            ),
        ];

        let mut mocks = Mocks::default();
        expect_profile_basics(&mut mocks, restaurant, feedback);
        mocks
            .covid_zone_client
            .expect_fetch_zone()
            .withf(|postcode| postcode == "10014")
            .returning(|_| Box::pin(async { Ok(Some(covid_zone())) }));
        mocks
            .metadata_client
            .expect_fetch_metadata()
            .returning(|_| Box::pin(async { Ok(metadata()) }));
        mocks
            .inspection_client
            .expect_fetch_records()
            .returning(|_, _, _| Box::pin(async { Ok(vec![inspection(20, "B"), inspection(2, "A")]) }));
        mocks
            .review_repository
            .expect_fetch_recent_visible()
            .returning(|_, _| Box::pin(async { Ok(Vec::new()) }));
        mocks
            .restaurant_repository
            .expect_find_similar()
            .withf(move |query| query.exclude_id == restaurant_id && query.limit == 20)
            .returning(move |_| {
                Box::pin(async move { Ok(vec![summary(restaurant_id), summary(other)]) })
            });
        mocks
            .favorite_repository
            .expect_is_favorite()
            .returning(|_, _| Box::pin(async { Ok(true) }));
        mocks
            .activity_log_repository
            .expect_record_visit()
            .withf(move |user_id, id| *user_id == caller_id && *id == restaurant_id)
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(1) }));

        let profile = mocks
            .into_service()
            .get_restaurant_profile(Some(caller), restaurant_id)
            .await
            .unwrap();

        let recommended: Vec<Uuid> = profile.recommended_restaurants.iter().map(|r| r.id).collect();
        assert_eq!(recommended, vec![other]);
        assert_eq!(
            profile.latest_inspection.and_then(|i| i.grade).as_deref(),
            Some("B")
        );
        assert_eq!(profile.saved, Some(true));
        assert_eq!(profile.stats.reviews_count, 0);
        assert_eq!(profile.covid_zone, Some(covid_zone()));
        assert_eq!(profile.safety.average_safety_rating, Some(4.0));
        assert_eq!(profile.safety.statistics.employee_mask, 50.0);
    }

    #[tokio::test]
    async fn test_similar_recovers_from_query_failure() {
        let restaurant = sample_restaurant();

        let mut mocks = Mocks::default();
        mocks.restaurant_repository.expect_get_by_id().returning(move |_| {
            let restaurant = restaurant.clone();
            Box::pin(async move { Ok(Some(restaurant)) })
        });
        mocks
            .metadata_client
            .expect_fetch_metadata()
            .returning(|_| Box::pin(async { Ok(metadata()) }));
        mocks
            .restaurant_repository
            .expect_find_similar()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let similar = mocks
            .into_service()
            .get_similar_restaurants(Uuid::new_v4(), Some(5))
            .await
            .unwrap();

        assert!(similar.is_empty());
    }

    #[tokio::test]
    async fn test_similar_limit_out_of_range_is_input_error() {
        for limit in [0, MAX_SIMILAR_LIMIT + 1, u64::MAX] {
            let mut mocks = Mocks::default();
            mocks.restaurant_repository.expect_get_by_id().never();
            mocks.restaurant_repository.expect_find_similar().never();

            let err = mocks
                .into_service()
                .get_similar_restaurants(Uuid::new_v4(), Some(limit))
                .await
                .unwrap_err();

            assert!(matches!(err, CoreError::InputError(_)), "limit {limit}");
        }
    }

    #[tokio::test]
    async fn test_inspection_failure_is_empty_history() {
        let restaurant = sample_restaurant();

        let mut mocks = Mocks::default();
        mocks.restaurant_repository.expect_get_by_id().returning(move |_| {
            let restaurant = restaurant.clone();
            Box::pin(async move { Ok(Some(restaurant)) })
        });
        expect_failing_upstreams(&mut mocks);

        let records = mocks
            .into_service()
            .get_inspection_records(Uuid::new_v4())
            .await
            .unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_anonymous_preference_chatbot_is_input_error() {
        let mut mocks = Mocks::default();
        mocks.restaurant_repository.expect_find_chatbot_candidates().never();

        let err = mocks
            .into_service()
            .chatbot_recommendations(
                None,
                ChatbotInput {
                    categories: None,
                    location: Some("Astoria".to_string()),
                    is_preference: true,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InputError(_)));
    }

    #[tokio::test]
    async fn test_preference_chatbot_uses_stored_categories() {
        let mut mocks = Mocks::default();
        mocks
            .user_repository
            .expect_get_preferences()
            .returning(|_| Box::pin(async { Ok(vec!["thai".to_string()]) }));
        mocks
            .restaurant_repository
            .expect_find_chatbot_candidates()
            .withf(|query| query.categories == vec!["thai"] && query.location == "Astoria")
            .returning(|_| {
                Box::pin(async { Ok((0..5).map(|_| summary(Uuid::new_v4())).collect()) })
            });
        mocks
            .random_source
            .expect_sample_indices()
            .returning(|_, _| vec![4, 2, 0]);

        let selected = mocks
            .into_service()
            .chatbot_recommendations(
                Some(identity(false)),
                ChatbotInput {
                    categories: Some(vec!["ignored".to_string()]),
                    location: Some("Astoria".to_string()),
                    is_preference: true,
                },
            )
            .await
            .unwrap();

        assert_eq!(selected.len(), 3);
    }

    #[tokio::test]
    async fn test_chatbot_without_preferences_is_input_error() {
        let mut mocks = Mocks::default();
        mocks
            .user_repository
            .expect_get_preferences()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));

        let err = mocks
            .into_service()
            .chatbot_recommendations(
                Some(identity(false)),
                ChatbotInput {
                    categories: None,
                    location: Some("Astoria".to_string()),
                    is_preference: true,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InputError(_)));
    }

    #[tokio::test]
    async fn test_favorites_only_search_requires_identity() {
        let mut mocks = Mocks::default();
        mocks.restaurant_repository.expect_search().never();

        let err = mocks
            .into_service()
            .search_restaurants(
                None,
                SearchRestaurantsInput {
                    favorites_only: true,
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Unauthorized);
    }

    #[tokio::test]
    async fn test_search_flags_saved_restaurants() {
        let saved = Uuid::new_v4();
        let unsaved = Uuid::new_v4();

        let mut mocks = Mocks::default();
        mocks
            .restaurant_repository
            .expect_search()
            .withf(|filter| filter.offset == 6 && filter.limit == 6 && filter.keyword.is_none())
            .returning(move |_| {
                Box::pin(async move { Ok((vec![summary(saved), summary(unsaved)], 8)) })
            });
        mocks
            .favorite_repository
            .expect_favorite_ids()
            .returning(move |_, _| Box::pin(async move { Ok(HashSet::from([saved])) }));

        let page = mocks
            .into_service()
            .search_restaurants(
                Some(identity(false)),
                SearchRestaurantsInput {
                    keyword: Some("  ".to_string()),
                    page: 2,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(page.total, 8);
        assert_eq!(page.items[0].saved_by_user, Some(true));
        assert_eq!(page.items[1].saved_by_user, Some(false));
    }

    #[tokio::test]
    async fn test_favorite_unknown_business() {
        let mut mocks = Mocks::default();
        mocks
            .restaurant_repository
            .expect_get_by_business_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks.favorite_repository.expect_add().never();

        let err = mocks
            .into_service()
            .save_favorite(identity(false), "nope".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }
}
