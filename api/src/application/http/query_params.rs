use std::str::FromStr;

use dinesafely_core::domain::restaurant::{
    entities::ComplianceStatus,
    value_objects::{RestaurantSort, SearchRestaurantsInput},
};
use utoipa::IntoParams;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Query string of the restaurant search.
///
/// List parameters may be repeated (`category=pizza&category=thai`) or
/// comma-separated (`category=pizza,thai`).
#[derive(Debug, Clone, Default, PartialEq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchRestaurantsQuery {
    /// Case-insensitive substring of the name.
    pub keyword: Option<String>,
    pub neighborhood: Vec<String>,
    pub category: Vec<String>,
    /// Price levels such as `$$`.
    pub price: Vec<String>,
    /// Minimum rating, 0 to 5.
    pub min_rating: Option<String>,
    /// `COMPLIANT`, `NON_COMPLIANT` or `UNKNOWN`.
    pub compliance: Option<String>,
    /// Only the caller's favorites. Requires authentication.
    pub favorites: Option<String>,
    /// `rating`, `-rating`, `name` or `-name`.
    pub sort: Option<String>,
    pub page: Option<String>,
}

fn split_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl SearchRestaurantsQuery {
    /// Builds the query from raw key/value pairs, keeping repeated keys.
    /// Unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "keyword" => query.keyword = non_empty(value),
                "neighborhood" => query.neighborhood.extend(split_list(value)),
                "category" => query.category.extend(split_list(value)),
                "price" => query.price.extend(split_list(value)),
                "min_rating" => query.min_rating = non_empty(value),
                "compliance" => query.compliance = non_empty(value),
                "favorites" => query.favorites = non_empty(value),
                "sort" => query.sort = non_empty(value),
                "page" => query.page = non_empty(value),
                _ => {}
            }
        }

        query
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl TryFrom<SearchRestaurantsQuery> for SearchRestaurantsInput {
    type Error = ApiError;

    fn try_from(query: SearchRestaurantsQuery) -> Result<Self, Self::Error> {
        let min_rating = query
            .min_rating
            .map(|value| {
                f64::from_str(&value)
                    .map_err(|_| ApiError::BadRequest(format!("invalid min_rating: {value}")))
            })
            .transpose()?;

        let compliance = query
            .compliance
            .map(|value| {
                ComplianceStatus::from_str(&value)
                    .map_err(|_| ApiError::BadRequest(format!("invalid compliance: {value}")))
            })
            .transpose()?;

        let favorites_only = match query.favorites {
            Some(value) => parse_flag(&value)
                .ok_or_else(|| ApiError::BadRequest(format!("invalid favorites flag: {value}")))?,
            None => false,
        };

        let sort = query
            .sort
            .map(|value| {
                RestaurantSort::from_str(&value)
                    .map_err(|_| ApiError::BadRequest(format!("invalid sort: {value}")))
            })
            .transpose()?;

        let page = query
            .page
            .map(|value| {
                value
                    .parse::<u64>()
                    .map_err(|_| ApiError::BadRequest(format!("invalid page: {value}")))
            })
            .transpose()?
            .unwrap_or(1);

        Ok(Self {
            keyword: query.keyword,
            neighborhoods: query.neighborhood,
            categories: query.category,
            prices: query.price,
            min_rating,
            compliance,
            favorites_only,
            sort,
            page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_repeated_and_comma_separated_lists() {
        let query = SearchRestaurantsQuery::from_pairs(&pairs(&[
            ("category", "pizza"),
            ("category", "thai, greek"),
            ("neighborhood", "Chelsea"),
            ("price", "$,$$"),
        ]));

        assert_eq!(query.category, vec!["pizza", "thai", "greek"]);
        assert_eq!(query.neighborhood, vec!["Chelsea"]);
        assert_eq!(query.price, vec!["$", "$$"]);
    }

    #[test]
    fn test_blank_values_are_dropped() {
        let query = SearchRestaurantsQuery::from_pairs(&pairs(&[
            ("keyword", "  "),
            ("category", ",,"),
            ("unknown", "x"),
        ]));

        assert_eq!(query, SearchRestaurantsQuery::default());
    }

    #[test]
    fn test_into_search_input() {
        let query = SearchRestaurantsQuery::from_pairs(&pairs(&[
            ("keyword", "joe"),
            ("min_rating", "3.5"),
            ("compliance", "compliant"),
            ("favorites", "true"),
            ("sort", "-rating"),
            ("page", "2"),
        ]));

        let input = SearchRestaurantsInput::try_from(query).unwrap();
        assert_eq!(input.keyword.as_deref(), Some("joe"));
        assert_eq!(input.min_rating, Some(3.5));
        assert_eq!(input.compliance, Some(ComplianceStatus::Compliant));
        assert!(input.favorites_only);
        assert_eq!(input.sort, Some(RestaurantSort::RatingDesc));
        assert_eq!(input.page, 2);
    }

    #[test]
    fn test_defaults() {
        let input = SearchRestaurantsInput::try_from(SearchRestaurantsQuery::default()).unwrap();
        assert_eq!(input.page, 1);
        assert!(!input.favorites_only);
        assert!(input.sort.is_none());
    }

    #[test]
    fn test_invalid_values_are_bad_requests() {
        for (key, value) in [
            ("min_rating", "high"),
            ("compliance", "COVID"),
            ("favorites", "maybe"),
            ("sort", "distance"),
            ("page", "-1"),
        ] {
            let query = SearchRestaurantsQuery::from_pairs(&pairs(&[(key, value)]));
            assert!(
                matches!(
                    SearchRestaurantsInput::try_from(query),
                    Err(ApiError::BadRequest(_))
                ),
                "{key}={value} should be rejected"
            );
        }
    }
}
