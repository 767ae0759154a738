use crate::{
    domain::review::entities::{Comment, Review, SubRatings},
    entity::{comments, reviews},
};

impl From<&reviews::Model> for Review {
    fn from(model: &reviews::Model) -> Self {
        Self {
            id: model.id,
            restaurant_id: model.restaurant_id,
            user_id: model.user_id,
            rating: model.rating,
            sub_ratings: SubRatings {
                safety: model.rating_safety,
                entry: model.rating_entry,
                door: model.rating_door,
                table: model.rating_table,
                bathroom: model.rating_bathroom,
                path: model.rating_path,
            },
            content: model.content.clone(),
            image1: model.image1.clone(),
            image2: model.image2.clone(),
            image3: model.image3.clone(),
            hidden: model.hidden,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<reviews::Model> for Review {
    fn from(model: reviews::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&comments::Model> for Comment {
    fn from(model: &comments::Model) -> Self {
        Self {
            id: model.id,
            review_id: model.review_id,
            user_id: model.user_id,
            text: model.text.clone(),
            hidden: model.hidden,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<comments::Model> for Comment {
    fn from(model: comments::Model) -> Self {
        Self::from(&model)
    }
}
