use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    restaurant::{
        entities::{
            CovidZone, InspectionRecord, Restaurant, RestaurantMetadata, RestaurantSummary,
        },
        value_objects::{
            ChatbotInput, ChatbotQuery, RestaurantPage, RestaurantProfile, RestaurantSearchFilter,
            SearchRestaurantsInput, SimilarityQuery,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RestaurantService: Send + Sync {
    fn get_restaurant_profile(
        &self,
        identity: Option<Identity>,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<RestaurantProfile, CoreError>> + Send;

    fn get_inspection_records(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Vec<InspectionRecord>, CoreError>> + Send;

    fn get_similar_restaurants(
        &self,
        restaurant_id: Uuid,
        limit: Option<u64>,
    ) -> impl Future<Output = Result<Vec<RestaurantSummary>, CoreError>> + Send;

    fn chatbot_recommendations(
        &self,
        identity: Option<Identity>,
        input: ChatbotInput,
    ) -> impl Future<Output = Result<Vec<RestaurantSummary>, CoreError>> + Send;

    fn search_restaurants(
        &self,
        identity: Option<Identity>,
        input: SearchRestaurantsInput,
    ) -> impl Future<Output = Result<RestaurantPage, CoreError>> + Send;

    fn save_favorite(
        &self,
        identity: Identity,
        business_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn remove_favorite(
        &self,
        identity: Identity,
        business_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RestaurantRepository: Send + Sync {
    fn get_by_id(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<Option<Restaurant>, CoreError>> + Send;

    fn get_by_business_id(
        &self,
        business_id: String,
    ) -> impl Future<Output = Result<Option<Restaurant>, CoreError>> + Send;

    /// Restaurants matching every clause of the query, source first when it
    /// matches, then by id ascending, at most `query.limit` rows.
    fn find_similar(
        &self,
        query: SimilarityQuery,
    ) -> impl Future<Output = Result<Vec<RestaurantSummary>, CoreError>> + Send;

    /// Compliant, well rated restaurants in the location serving one of the categories.
    fn find_chatbot_candidates(
        &self,
        query: ChatbotQuery,
    ) -> impl Future<Output = Result<Vec<RestaurantSummary>, CoreError>> + Send;

    /// One page of restaurants plus the total number of matches.
    fn search(
        &self,
        filter: RestaurantSearchFilter,
    ) -> impl Future<Output = Result<(Vec<RestaurantSummary>, u64), CoreError>> + Send;
}

/// Third-party business metadata (categories, neighborhood, rating).
#[cfg_attr(test, mockall::automock)]
pub trait RestaurantMetadataClient: Send + Sync {
    fn fetch_metadata(
        &self,
        business_id: String,
    ) -> impl Future<Output = Result<RestaurantMetadata, CoreError>> + Send;
}

/// Government inspection records lookup.
#[cfg_attr(test, mockall::automock)]
pub trait InspectionClient: Send + Sync {
    /// Records for the establishment, newest first.
    fn fetch_records(
        &self,
        name: String,
        address: String,
        postcode: String,
    ) -> impl Future<Output = Result<Vec<InspectionRecord>, CoreError>> + Send;
}

/// COVID-19 figures per ZIP code tabulation area.
#[cfg_attr(test, mockall::automock)]
pub trait CovidZoneClient: Send + Sync {
    /// The zone covering `postcode`, `None` when the dataset has no row for it.
    fn fetch_zone(
        &self,
        postcode: String,
    ) -> impl Future<Output = Result<Option<CovidZone>, CoreError>> + Send;
}

/// Source of randomness for the chatbot sampler.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// `amount` distinct indices drawn uniformly from `0..population`.
    fn sample_indices(&self, population: usize, amount: usize) -> Vec<usize>;
}
