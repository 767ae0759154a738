use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    user::entities::AuthorSummary,
};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Accessibility and safety sub-ratings of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubRatings {
    pub safety: i32,
    pub entry: i32,
    pub door: i32,
    pub table: i32,
    pub bathroom: i32,
    pub path: i32,
}

impl SubRatings {
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            ("rating_safety", self.safety),
            ("rating_entry", self.entry),
            ("rating_door", self.door),
            ("rating_table", self.table),
            ("rating_bathroom", self.bathroom),
            ("rating_path", self.path),
        ];

        for (name, value) in fields {
            validate_rating(name, value)?;
        }

        Ok(())
    }
}

pub fn validate_rating(field: &str, value: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::InputError(format!(
            "{field} must be between {MIN_RATING} and {MAX_RATING}, got {value}"
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub sub_ratings: SubRatings,
    pub content: Option<String>,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ReviewConfig {
    pub restaurant_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub sub_ratings: SubRatings,
    pub content: Option<String>,
    pub images: [Option<String>; 3],
}

impl Review {
    pub fn new(config: ReviewConfig) -> Self {
        let (now, timestamp) = generate_timestamp();
        let [image1, image2, image3] = config.images;

        Self {
            id: Uuid::new_v7(timestamp),
            restaurant_id: config.restaurant_id,
            user_id: config.user_id,
            rating: config.rating,
            sub_ratings: config.sub_ratings,
            content: config.content,
            image1,
            image2,
            image3,
            hidden: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every editable field. The moderation flag is left untouched.
    pub fn update(
        &mut self,
        rating: i32,
        sub_ratings: SubRatings,
        content: Option<String>,
        images: [Option<String>; 3],
    ) {
        let [image1, image2, image3] = images;

        self.rating = rating;
        self.sub_ratings = sub_ratings;
        self.content = content;
        self.image1 = image1;
        self.image2 = image2;
        self.image3 = image3;
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    pub review_id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub hidden: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(review_id: Uuid, user_id: Uuid, text: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            review_id,
            user_id,
            text,
            hidden: false,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReviewWithAuthor {
    pub review: Review,
    pub author: AuthorSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: AuthorSummary,
}

/// A review as rendered on the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReviewView {
    #[serde(flatten)]
    pub review: Review,
    pub author: AuthorSummary,
    pub comments: Vec<CommentView>,
    pub liked: bool,
    pub likes_num: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LikeToggle {
    pub liked: bool,
    pub likes_num: u64,
}
