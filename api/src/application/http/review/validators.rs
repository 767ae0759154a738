use dinesafely_core::domain::review::{
    entities::SubRatings,
    value_objects::{CreateCommentInput, CreateReviewInput, UpdateReviewInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReviewValidator {
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,

    #[validate(range(min = 1, max = 5, message = "rating_safety must be between 1 and 5"))]
    pub rating_safety: i32,

    #[validate(range(min = 1, max = 5, message = "rating_entry must be between 1 and 5"))]
    pub rating_entry: i32,

    #[validate(range(min = 1, max = 5, message = "rating_door must be between 1 and 5"))]
    pub rating_door: i32,

    #[validate(range(min = 1, max = 5, message = "rating_table must be between 1 and 5"))]
    pub rating_table: i32,

    #[validate(range(min = 1, max = 5, message = "rating_bathroom must be between 1 and 5"))]
    pub rating_bathroom: i32,

    #[validate(range(min = 1, max = 5, message = "rating_path must be between 1 and 5"))]
    pub rating_path: i32,

    #[serde(default)]
    #[validate(length(max = 5000, message = "content is too long"))]
    pub content: Option<String>,

    #[serde(default)]
    pub image1: Option<String>,

    #[serde(default)]
    pub image2: Option<String>,

    #[serde(default)]
    pub image3: Option<String>,
}

impl From<CreateReviewValidator> for CreateReviewInput {
    fn from(payload: CreateReviewValidator) -> Self {
        Self {
            rating: payload.rating,
            sub_ratings: SubRatings {
                safety: payload.rating_safety,
                entry: payload.rating_entry,
                door: payload.rating_door,
                table: payload.rating_table,
                bathroom: payload.rating_bathroom,
                path: payload.rating_path,
            },
            content: payload.content,
            images: [payload.image1, payload.image2, payload.image3],
        }
    }
}

/// Edit payload. Rating fields are optional here so that a missing one is
/// reported by name instead of as a JSON error.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateReviewValidator {
    #[serde(default)]
    pub rating: Option<i32>,

    #[serde(default)]
    pub rating_safety: Option<i32>,

    #[serde(default)]
    pub rating_entry: Option<i32>,

    #[serde(default)]
    pub rating_door: Option<i32>,

    #[serde(default)]
    pub rating_table: Option<i32>,

    #[serde(default)]
    pub rating_bathroom: Option<i32>,

    #[serde(default)]
    pub rating_path: Option<i32>,

    #[serde(default)]
    #[validate(length(max = 5000, message = "content is too long"))]
    pub content: Option<String>,

    #[serde(default)]
    pub image1: Option<String>,

    #[serde(default)]
    pub image2: Option<String>,

    #[serde(default)]
    pub image3: Option<String>,
}

impl From<UpdateReviewValidator> for UpdateReviewInput {
    fn from(payload: UpdateReviewValidator) -> Self {
        Self {
            rating: payload.rating,
            rating_safety: payload.rating_safety,
            rating_entry: payload.rating_entry,
            rating_door: payload.rating_door,
            rating_table: payload.rating_table,
            rating_bathroom: payload.rating_bathroom,
            rating_path: payload.rating_path,
            content: payload.content,
            images: [payload.image1, payload.image2, payload.image3],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentValidator {
    #[validate(length(min = 1, max = 1000, message = "text must be 1 to 1000 characters"))]
    pub text: String,
}

impl From<CreateCommentValidator> for CreateCommentInput {
    fn from(payload: CreateCommentValidator) -> Self {
        Self { text: payload.text }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn create_payload(rating: i32) -> CreateReviewValidator {
        serde_json::from_value(json!({
            "rating": rating,
            "rating_safety": 4,
            "rating_entry": 3,
            "rating_door": 5,
            "rating_table": 2,
            "rating_bathroom": 1,
            "rating_path": 4,
            "content": "Great ramp at the entrance",
            "image1": "reviews/1.jpg"
        }))
        .unwrap()
    }

    #[test]
    fn test_create_review_conversion() {
        let payload = create_payload(5);
        assert!(payload.validate().is_ok());

        let input = CreateReviewInput::from(payload);
        assert_eq!(input.rating, 5);
        assert_eq!(input.sub_ratings.door, 5);
        assert_eq!(input.sub_ratings.bathroom, 1);
        assert_eq!(input.images[0].as_deref(), Some("reviews/1.jpg"));
        assert!(input.images[1].is_none());
    }

    #[test]
    fn test_create_review_rating_range() {
        assert!(create_payload(0).validate().is_err());
        assert!(create_payload(6).validate().is_err());
    }

    #[test]
    fn test_update_review_keeps_missing_fields_missing() {
        let payload: UpdateReviewValidator =
            serde_json::from_value(json!({ "rating": 4, "content": "edited" })).unwrap();
        let input = UpdateReviewInput::from(payload);

        assert_eq!(input.rating, Some(4));
        assert!(input.rating_safety.is_none());
        assert!(input.ratings().is_err());
    }

    #[test]
    fn test_comment_length() {
        let empty = CreateCommentValidator {
            text: String::new(),
        };
        assert!(empty.validate().is_err());

        let ok = CreateCommentValidator {
            text: "Agreed!".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
