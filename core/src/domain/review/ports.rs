use std::{
    collections::{HashMap, HashSet},
    future::Future,
};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    review::{
        entities::{Comment, LikeToggle, Review},
        value_objects::{CreateCommentInput, CreateReviewInput, UpdateReviewInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ReviewService: Send + Sync {
    fn create_review(
        &self,
        identity: Identity,
        restaurant_id: Uuid,
        input: CreateReviewInput,
    ) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn update_review(
        &self,
        identity: Identity,
        review_id: Uuid,
        input: UpdateReviewInput,
    ) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn delete_review(
        &self,
        identity: Identity,
        review_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn toggle_like(
        &self,
        identity: Identity,
        review_id: Uuid,
    ) -> impl Future<Output = Result<LikeToggle, CoreError>> + Send;

    fn create_comment(
        &self,
        identity: Identity,
        review_id: Uuid,
        input: CreateCommentInput,
    ) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    fn delete_comment(
        &self,
        identity: Identity,
        comment_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ReviewRepository: Send + Sync {
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn get_by_id(
        &self,
        review_id: Uuid,
    ) -> impl Future<Output = Result<Option<Review>, CoreError>> + Send;

    fn update(&self, review: Review) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn delete(&self, review_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Most recent non-hidden reviews of the restaurant, newest first.
    fn fetch_recent_visible(
        &self,
        restaurant_id: Uuid,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Review>, CoreError>> + Send;

    /// Reviews written by the user since `since`, optionally restricted to one restaurant.
    fn count_since(
        &self,
        user_id: Uuid,
        restaurant_id: Option<Uuid>,
        since: DateTime<Utc>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Adds the like when absent, removes it when present. Atomic per (review, user).
    fn toggle_like(
        &self,
        review_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<LikeToggle, CoreError>> + Send;

    fn count_likes(
        &self,
        review_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<HashMap<Uuid, u64>, CoreError>> + Send;

    /// The subset of `review_ids` liked by the user.
    fn liked_by(
        &self,
        review_ids: Vec<Uuid>,
        user_id: Uuid,
    ) -> impl Future<Output = Result<HashSet<Uuid>, CoreError>> + Send;

    fn set_hidden(
        &self,
        review_id: Uuid,
        hidden: bool,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CommentRepository: Send + Sync {
    fn create(&self, comment: Comment) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    fn get_by_id(
        &self,
        comment_id: Uuid,
    ) -> impl Future<Output = Result<Option<Comment>, CoreError>> + Send;

    fn delete(&self, comment_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Non-hidden comments of the given reviews, oldest first.
    fn fetch_visible_for_reviews(
        &self,
        review_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Comment>, CoreError>> + Send;

    fn set_hidden(
        &self,
        comment_id: Uuid,
        hidden: bool,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
