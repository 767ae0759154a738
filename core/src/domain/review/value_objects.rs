use crate::domain::{
    common::entities::app_errors::CoreError,
    review::entities::{SubRatings, validate_rating},
};

/// Number of recent visible reviews loaded for a profile page.
pub const PROFILE_REVIEW_LIMIT: u64 = 50;
/// Length of the sliding window the review limits apply to.
pub const REVIEW_WINDOW_HOURS: i64 = 24;
pub const MAX_REVIEWS_PER_RESTAURANT_IN_WINDOW: u64 = 1;
pub const MAX_REVIEWS_PER_USER_IN_WINDOW: u64 = 2;

#[derive(Debug, Clone)]
pub struct CreateReviewInput {
    pub rating: i32,
    pub sub_ratings: SubRatings,
    pub content: Option<String>,
    pub images: [Option<String>; 3],
}

impl CreateReviewInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_rating("rating", self.rating)?;
        self.sub_ratings.validate()
    }
}

/// Edit payload. Every rating field must be present.
#[derive(Debug, Clone, Default)]
pub struct UpdateReviewInput {
    pub rating: Option<i32>,
    pub rating_safety: Option<i32>,
    pub rating_entry: Option<i32>,
    pub rating_door: Option<i32>,
    pub rating_table: Option<i32>,
    pub rating_bathroom: Option<i32>,
    pub rating_path: Option<i32>,
    pub content: Option<String>,
    pub images: [Option<String>; 3],
}

impl UpdateReviewInput {
    /// Returns the primary rating and the sub-ratings, or an input error
    /// naming every missing field.
    pub fn ratings(&self) -> Result<(i32, SubRatings), CoreError> {
        let fields = [
            ("rating", self.rating),
            ("rating_safety", self.rating_safety),
            ("rating_entry", self.rating_entry),
            ("rating_door", self.rating_door),
            ("rating_table", self.rating_table),
            ("rating_bathroom", self.rating_bathroom),
            ("rating_path", self.rating_path),
        ];

        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(CoreError::InputError(format!(
                "missing rating fields: {}",
                missing.join(", ")
            )));
        }

        let [rating, safety, entry, door, table, bathroom, path] =
            fields.map(|(_, value)| value.unwrap_or_default());

        validate_rating("rating", rating)?;
        let sub_ratings = SubRatings {
            safety,
            entry,
            door,
            table,
            bathroom,
            path,
        };
        sub_ratings.validate()?;

        Ok((rating, sub_ratings))
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentInput {
    pub text: String,
}
