use crate::{
    domain::community::entities::{Answer, Faq, Question},
    entity::{faqs, restaurant_answers, restaurant_questions},
};

impl From<restaurant_questions::Model> for Question {
    fn from(model: restaurant_questions::Model) -> Self {
        Self {
            id: model.id,
            restaurant_id: model.restaurant_id,
            user_id: model.user_id,
            question: model.question,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<restaurant_answers::Model> for Answer {
    fn from(model: restaurant_answers::Model) -> Self {
        Self {
            id: model.id,
            question_id: model.question_id,
            user_id: model.user_id,
            text: model.text,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<faqs::Model> for Faq {
    fn from(model: faqs::Model) -> Self {
        Self {
            id: model.id,
            question: model.question,
            answer: model.answer,
            position: model.position,
            created_at: model.created_at.to_utc(),
        }
    }
}
