//! Chatbot recommendation: validate the request, then sample at most
//! [`CHATBOT_SAMPLE_SIZE`] restaurants out of the matching ones.

use crate::domain::{
    common::entities::app_errors::CoreError,
    restaurant::{
        entities::RestaurantSummary,
        ports::RandomSource,
        value_objects::{CHATBOT_SAMPLE_SIZE, ChatbotQuery},
    },
};

pub fn validate_chatbot_input(
    categories: Option<Vec<String>>,
    location: Option<String>,
) -> Result<ChatbotQuery, CoreError> {
    let categories: Vec<String> = categories
        .unwrap_or_default()
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();

    if categories.is_empty() {
        return Err(CoreError::InputError(
            "at least one category is required".to_string(),
        ));
    }

    let location = location
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .ok_or_else(|| CoreError::InputError("location is required".to_string()))?;

    Ok(ChatbotQuery {
        categories,
        location,
    })
}

/// Returns `candidates` untouched when there are at most three of them,
/// otherwise three distinct entries picked by `random`.
pub fn select_chatbot_restaurants(
    candidates: Vec<RestaurantSummary>,
    random: &dyn RandomSource,
) -> Vec<RestaurantSummary> {
    if candidates.len() <= CHATBOT_SAMPLE_SIZE {
        return candidates;
    }

    random
        .sample_indices(candidates.len(), CHATBOT_SAMPLE_SIZE)
        .into_iter()
        .filter_map(|index| candidates.get(index).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use uuid::Uuid;

    use super::*;
    use crate::{
        domain::restaurant::{entities::ComplianceStatus, ports::MockRandomSource},
        infrastructure::random::SeededRandomSource,
    };

    fn summary(id: u128) -> RestaurantSummary {
        RestaurantSummary {
            id: Uuid::from_u128(id),
            business_id: format!("biz-{id}"),
            name: format!("Restaurant {id}"),
            address: "1 Main St".to_string(),
            postcode: "10001".to_string(),
            compliance: ComplianceStatus::Compliant,
            neighborhood: Some("Astoria".to_string()),
            categories: vec!["greek".to_string()],
            rating: Some(4.5),
            price: None,
        }
    }

    #[test]
    fn test_missing_categories_is_input_error() {
        let result = validate_chatbot_input(None, Some("Astoria".to_string()));
        assert!(matches!(result, Err(CoreError::InputError(_))));
    }

    #[test]
    fn test_blank_categories_are_input_error() {
        let result = validate_chatbot_input(
            Some(vec!["".to_string(), "  ".to_string()]),
            Some("Astoria".to_string()),
        );
        assert!(matches!(result, Err(CoreError::InputError(_))));
    }

    #[test]
    fn test_missing_location_is_input_error() {
        let result = validate_chatbot_input(Some(vec!["greek".to_string()]), Some(" ".to_string()));
        assert!(matches!(result, Err(CoreError::InputError(_))));
    }

    #[test]
    fn test_valid_input_is_trimmed() {
        let query = validate_chatbot_input(
            Some(vec![" greek ".to_string(), "pizza".to_string()]),
            Some(" Astoria ".to_string()),
        )
        .unwrap();

        assert_eq!(query.categories, vec!["greek", "pizza"]);
        assert_eq!(query.location, "Astoria");
    }

    #[test]
    fn test_small_sets_are_returned_unmodified() {
        let mut random = MockRandomSource::new();
        random.expect_sample_indices().never();

        for size in 0..=3 {
            let candidates: Vec<_> = (1..=size).map(summary).collect();
            let selected = select_chatbot_restaurants(candidates.clone(), &random);
            assert_eq!(selected, candidates);
        }
    }

    #[test]
    fn test_large_sets_use_the_random_source() {
        let mut random = MockRandomSource::new();
        random
            .expect_sample_indices()
            .withf(|population, amount| *population == 6 && *amount == 3)
            .times(1)
            .returning(|_, _| vec![5, 0, 2]);

        let candidates: Vec<_> = (1..=6).map(summary).collect();
        let selected = select_chatbot_restaurants(candidates, &random);

        let ids: Vec<u128> = selected.iter().map(|r| r.id.as_u128()).collect();
        assert_eq!(ids, vec![6, 1, 3]);
    }

    #[test]
    fn test_seeded_selection_is_three_distinct_members() {
        let candidates: Vec<_> = (1..=20).map(summary).collect();

        for seed in 0..50 {
            let random = SeededRandomSource::new(seed);
            let selected = select_chatbot_restaurants(candidates.clone(), &random);

            assert_eq!(selected.len(), 3);
            let distinct: HashSet<_> = selected.iter().map(|r| r.id).collect();
            assert_eq!(distinct.len(), 3);
            assert!(selected.iter().all(|r| candidates.contains(r)));
        }
    }

    #[test]
    fn test_same_seed_same_selection() {
        let candidates: Vec<_> = (1..=10).map(summary).collect();

        let first = select_chatbot_restaurants(candidates.clone(), &SeededRandomSource::new(7));
        let second = select_chatbot_restaurants(candidates, &SeededRandomSource::new(7));

        assert_eq!(first, second);
    }
}
