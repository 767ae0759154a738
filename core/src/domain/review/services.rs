use std::collections::{HashMap, HashSet};

use chrono::{Duration, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    activity::ports::ActivityLogRepository,
    authentication::{ports::TokenVerifier, value_objects::Identity},
    common::{
        entities::app_errors::CoreError,
        policies::{can_modify_owned, ensure_policy},
        services::Service,
    },
    community::ports::QuestionRepository,
    favorite::ports::FavoriteRepository,
    health::ports::HealthCheckRepository,
    moderation::ports::{ModerationNotifier, ReportRepository},
    restaurant::ports::{
        CovidZoneClient, InspectionClient, RandomSource, RestaurantMetadataClient,
        RestaurantRepository,
    },
    review::{
        entities::{Comment, CommentView, LikeToggle, Review, ReviewConfig, ReviewView},
        ports::{CommentRepository, ReviewRepository, ReviewService},
        value_objects::{
            CreateCommentInput, CreateReviewInput, MAX_REVIEWS_PER_RESTAURANT_IN_WINDOW,
            MAX_REVIEWS_PER_USER_IN_WINDOW, REVIEW_WINDOW_HOURS, UpdateReviewInput,
        },
    },
    safety::ports::SafetyFeedbackRepository,
    user::{
        entities::AuthorSummary,
        ports::{HasherRepository, UserRepository},
    },
};

/// Joins reviews with their comments, authors and like state. Review order is kept;
/// comments keep the order they were supplied in.
pub fn assemble_review_views(
    reviews: Vec<Review>,
    comments: Vec<Comment>,
    authors: &HashMap<Uuid, AuthorSummary>,
    likes: &HashMap<Uuid, u64>,
    liked: &HashSet<Uuid>,
) -> Vec<ReviewView> {
    let author = |user_id: Uuid| {
        authors
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| AuthorSummary::unknown(user_id))
    };

    let mut comments_by_review: HashMap<Uuid, Vec<CommentView>> = HashMap::new();
    for comment in comments.into_iter().filter(|c| !c.hidden) {
        let view = CommentView {
            author: author(comment.user_id),
            comment,
        };
        comments_by_review
            .entry(view.comment.review_id)
            .or_default()
            .push(view);
    }

    reviews
        .into_iter()
        .filter(|review| !review.hidden)
        .map(|review| ReviewView {
            author: author(review.user_id),
            comments: comments_by_review.remove(&review.id).unwrap_or_default(),
            liked: liked.contains(&review.id),
            likes_num: likes.get(&review.id).copied().unwrap_or(0),
            review,
        })
        .collect()
}

impl<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF> ReviewService
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
    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn create_review(
        &self,
        identity: Identity,
        restaurant_id: Uuid,
        input: CreateReviewInput,
    ) -> Result<Review, CoreError> {
        input.validate()?;

        self.restaurant_repository
            .get_by_id(restaurant_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let since = Utc::now() - Duration::hours(REVIEW_WINDOW_HOURS);

        let for_restaurant = self
            .review_repository
            .count_since(identity.id(), Some(restaurant_id), since)
            .await?;
        if for_restaurant >= MAX_REVIEWS_PER_RESTAURANT_IN_WINDOW {
            return Err(CoreError::ReviewLimitExceeded(
                "you already reviewed this restaurant in the last 24 hours".to_string(),
            ));
        }

        let overall = self
            .review_repository
            .count_since(identity.id(), None, since)
            .await?;
        if overall >= MAX_REVIEWS_PER_USER_IN_WINDOW {
            return Err(CoreError::ReviewLimitExceeded(format!(
                "at most {MAX_REVIEWS_PER_USER_IN_WINDOW} reviews can be posted in 24 hours"
            )));
        }

        let review = Review::new(ReviewConfig {
            restaurant_id,
            user_id: identity.id(),
            rating: input.rating,
            sub_ratings: input.sub_ratings,
            content: input.content,
            images: input.images,
        });

        self.review_repository.create(review).await
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn update_review(
        &self,
        identity: Identity,
        review_id: Uuid,
        input: UpdateReviewInput,
    ) -> Result<Review, CoreError> {
        let mut review = self
            .review_repository
            .get_by_id(review_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            can_modify_owned(&identity, review.user_id),
            "only the author can edit this review",
        )?;

        let (rating, sub_ratings) = input.ratings()?;
        review.update(rating, sub_ratings, input.content, input.images);

        self.review_repository.update(review).await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn delete_review(&self, identity: Identity, review_id: Uuid) -> Result<(), CoreError> {
        let review = self
            .review_repository
            .get_by_id(review_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            can_modify_owned(&identity, review.user_id),
            "only the author can delete this review",
        )?;

        self.review_repository.delete(review_id).await?;
        info!(%review_id, "review deleted by author");

        Ok(())
    }

    async fn toggle_like(&self, identity: Identity, review_id: Uuid) -> Result<LikeToggle, CoreError> {
        let review = self
            .review_repository
            .get_by_id(review_id)
            .await?
            .filter(|review| !review.hidden)
            .ok_or(CoreError::NotFound)?;

        self.review_repository
            .toggle_like(review.id, identity.id())
            .await
    }

    async fn create_comment(
        &self,
        identity: Identity,
        review_id: Uuid,
        input: CreateCommentInput,
    ) -> Result<Comment, CoreError> {
        let text = input.text.trim();
        if text.is_empty() {
            return Err(CoreError::InputError("comment text is required".to_string()));
        }

        self.review_repository
            .get_by_id(review_id)
            .await?
            .filter(|review| !review.hidden)
            .ok_or(CoreError::NotFound)?;

        let comment = Comment::new(review_id, identity.id(), text.to_string());
        self.comment_repository.create(comment).await
    }

    async fn delete_comment(&self, identity: Identity, comment_id: Uuid) -> Result<(), CoreError> {
        let comment = self
            .comment_repository
            .get_by_id(comment_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            can_modify_owned(&identity, comment.user_id),
            "only the author can delete this comment",
        )?;

        self.comment_repository.delete(comment_id).await
    }
}
