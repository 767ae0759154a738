//! Similar-restaurant selection shown on the profile page.
//!
//! A candidate must share the source's neighborhood and compliance status and
//! at least one category. Candidates are ordered by id, except that the
//! source itself is ordered first so that it always lands inside the `limit`
//! window and is then dropped from it.

use uuid::Uuid;

use crate::domain::restaurant::{
    entities::{Restaurant, RestaurantMetadata, RestaurantSummary},
    value_objects::SimilarityQuery,
};

/// Builds the candidate query for `restaurant`.
///
/// Categories come from the third-party metadata; without metadata, without
/// categories or without a neighborhood there is nothing to match on and
/// `None` is returned.
pub fn similarity_query(
    restaurant: &Restaurant,
    metadata: Option<&RestaurantMetadata>,
    limit: u64,
) -> Option<SimilarityQuery> {
    let metadata = metadata?;

    if metadata.categories.is_empty() {
        return None;
    }

    let neighborhood = restaurant
        .neighborhood
        .clone()
        .or_else(|| metadata.neighborhood.clone())
        .filter(|n| !n.trim().is_empty())?;

    Some(SimilarityQuery {
        categories: metadata.categories.clone(),
        neighborhood,
        compliance: restaurant.compliance,
        limit,
        exclude_id: restaurant.id,
    })
}

/// Orders `candidates`, keeps the first `limit` and removes `source_id`.
///
/// The result has `min(limit, candidates) - 1` entries when the source is a
/// candidate and `min(limit, candidates)` otherwise.
pub fn recommend_similar(
    mut candidates: Vec<RestaurantSummary>,
    source_id: Uuid,
    limit: usize,
) -> Vec<RestaurantSummary> {
    candidates.sort_by_key(|r| (r.id != source_id, r.id));
    candidates.dedup_by_key(|r| r.id);
    candidates.truncate(limit);
    remove_restaurant(&mut candidates, source_id);
    candidates
}

/// Swaps the matching entry with the last one and truncates. Returns whether
/// anything was removed.
pub fn remove_restaurant(restaurants: &mut Vec<RestaurantSummary>, restaurant_id: Uuid) -> bool {
    match restaurants.iter().position(|r| r.id == restaurant_id) {
        Some(index) => {
            restaurants.swap_remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::restaurant::entities::{ComplianceStatus, RestaurantConfig};

    fn summary(id: u128) -> RestaurantSummary {
        RestaurantSummary {
            id: Uuid::from_u128(id),
            business_id: format!("biz-{id}"),
            name: format!("Restaurant {id}"),
            address: "1 Main St".to_string(),
            postcode: "10001".to_string(),
            compliance: ComplianceStatus::Compliant,
            neighborhood: Some("Chelsea".to_string()),
            categories: vec!["pizza".to_string()],
            rating: Some(4.0),
            price: None,
        }
    }

    fn ids(list: &[RestaurantSummary]) -> Vec<u128> {
        list.iter().map(|r| r.id.as_u128()).collect()
    }

    fn restaurant(neighborhood: Option<&str>) -> Restaurant {
        Restaurant::new(RestaurantConfig {
            business_id: "biz".to_string(),
            name: "Joe's".to_string(),
            address: "7 Carmine St".to_string(),
            postcode: "10014".to_string(),
            compliance: ComplianceStatus::Compliant,
            neighborhood: neighborhood.map(str::to_string),
            categories: vec!["pizza".to_string()],
            rating: Some(4.5),
            price: Some("$".to_string()),
        })
    }

    fn metadata(categories: &[&str]) -> RestaurantMetadata {
        RestaurantMetadata {
            business_id: "biz".to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            neighborhood: None,
            rating: None,
            price: None,
            review_count: None,
            image_url: None,
            url: None,
            phone: None,
        }
    }

    #[test]
    fn test_source_is_never_returned() {
        let candidates = (1..=5).map(summary).collect();
        let result = recommend_similar(candidates, Uuid::from_u128(3), 20);

        assert_eq!(result.len(), 4);
        assert!(!result.iter().any(|r| r.id == Uuid::from_u128(3)));
    }

    #[test]
    fn test_length_without_source_match() {
        let candidates = (1..=5).map(summary).collect();
        let result = recommend_similar(candidates, Uuid::from_u128(99), 3);

        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_source_outside_window_still_counts() {
        let candidates = (1..=10).map(summary).collect();
        let result = recommend_similar(candidates, Uuid::from_u128(10), 4);

        // min(4, 10) - 1
        assert_eq!(result.len(), 3);
        assert!(!result.iter().any(|r| r.id == Uuid::from_u128(10)));
    }

    #[test]
    fn test_swap_with_last_keeps_remaining_order() {
        let candidates = vec![summary(4), summary(2), summary(3), summary(1)];
        let result = recommend_similar(candidates, Uuid::from_u128(2), 20);

        // [2, 1, 3, 4] -> source swapped with the last entry
        assert_eq!(ids(&result), vec![4, 1, 3]);
    }

    #[test]
    fn test_zero_limit_is_empty() {
        let candidates = (1..=3).map(summary).collect();
        assert!(recommend_similar(candidates, Uuid::from_u128(1), 0).is_empty());
    }

    #[test]
    fn test_only_source_yields_empty() {
        let result = recommend_similar(vec![summary(7)], Uuid::from_u128(7), 20);
        assert!(result.is_empty());
    }

    #[test]
    fn test_remove_restaurant_absent_is_noop() {
        let mut list = vec![summary(1), summary(2)];
        assert!(!remove_restaurant(&mut list, Uuid::from_u128(3)));
        assert_eq!(ids(&list), vec![1, 2]);
    }

    #[test]
    fn test_similarity_query_needs_metadata() {
        let source = restaurant(Some("West Village"));
        assert!(similarity_query(&source, None, 20).is_none());
        assert!(similarity_query(&source, Some(&metadata(&[])), 20).is_none());
    }

    #[test]
    fn test_similarity_query_needs_neighborhood() {
        let source = restaurant(None);
        assert!(similarity_query(&source, Some(&metadata(&["pizza"])), 20).is_none());
    }

    #[test]
    fn test_similarity_query_uses_source_attributes() {
        let source = restaurant(Some("West Village"));
        let query = similarity_query(&source, Some(&metadata(&["pizza", "italian"])), 20)
            .expect("query");

        assert_eq!(query.categories, vec!["pizza", "italian"]);
        assert_eq!(query.neighborhood, "West Village");
        assert_eq!(query.compliance, ComplianceStatus::Compliant);
        assert_eq!(query.limit, 20);
        assert_eq!(query.exclude_id, source.id);
    }
}
