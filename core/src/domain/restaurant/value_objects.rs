use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    community::entities::QuestionView,
    restaurant::entities::{
        ComplianceStatus, CovidZone, InspectionRecord, Restaurant, RestaurantMetadata,
        RestaurantSummary,
    },
    review::{aggregator::ReviewStats, entities::ReviewView},
    safety::aggregator::SafetyFeedbackSummary,
};

pub const DEFAULT_SIMILAR_LIMIT: u64 = 20;
pub const MAX_SIMILAR_LIMIT: u64 = 100;
pub const CHATBOT_SAMPLE_SIZE: usize = 3;
pub const CHATBOT_RATINGS: [f64; 5] = [3.0, 3.5, 4.0, 4.5, 5.0];
pub const SEARCH_PAGE_SIZE: u64 = 6;

/// Attributes a candidate must share with the source restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityQuery {
    pub categories: Vec<String>,
    pub neighborhood: String,
    pub compliance: ComplianceStatus,
    pub limit: u64,
    pub exclude_id: Uuid,
}

/// Raw chatbot request as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct ChatbotInput {
    pub categories: Option<Vec<String>>,
    pub location: Option<String>,
    pub is_preference: bool,
}

/// Validated chatbot criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatbotQuery {
    pub categories: Vec<String>,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestaurantSort {
    RatingAsc,
    RatingDesc,
    NameAsc,
    NameDesc,
}

impl FromStr for RestaurantSort {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rating" => Ok(RestaurantSort::RatingAsc),
            "-rating" => Ok(RestaurantSort::RatingDesc),
            "name" => Ok(RestaurantSort::NameAsc),
            "-name" => Ok(RestaurantSort::NameDesc),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchRestaurantsInput {
    pub keyword: Option<String>,
    pub neighborhoods: Vec<String>,
    pub categories: Vec<String>,
    pub prices: Vec<String>,
    pub min_rating: Option<f64>,
    pub compliance: Option<ComplianceStatus>,
    pub favorites_only: bool,
    pub sort: Option<RestaurantSort>,
    pub page: u64,
}

/// Repository-level search filter, already resolved to offset/limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantSearchFilter {
    pub keyword: Option<String>,
    pub neighborhoods: Vec<String>,
    pub categories: Vec<String>,
    pub prices: Vec<String>,
    pub min_rating: Option<f64>,
    pub compliance: Option<ComplianceStatus>,
    pub favorites_of: Option<Uuid>,
    pub sort: Option<RestaurantSort>,
    pub offset: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantListItem {
    #[serde(flatten)]
    pub restaurant: RestaurantSummary,
    pub saved_by_user: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantPage {
    pub items: Vec<RestaurantListItem>,
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
}

/// Everything the profile page shows for one restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantProfile {
    pub restaurant: Restaurant,
    pub metadata: Option<RestaurantMetadata>,
    pub latest_inspection: Option<InspectionRecord>,
    pub covid_zone: Option<CovidZone>,
    pub safety: SafetyFeedbackSummary,
    pub reviews: Vec<ReviewView>,
    pub stats: ReviewStats,
    pub recommended_restaurants: Vec<RestaurantSummary>,
    pub questions: Vec<QuestionView>,
    pub total_question_count: u64,
    pub saved: Option<bool>,
}
