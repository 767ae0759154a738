use axum::{extract::FromRequestParts, http::request::Parts};

use super::{query_params::SearchRestaurantsQuery, server::api_entities::api_error::ApiError};

/// Extractor for the restaurant search query string. Keeps repeated keys,
/// which `Query<T>` cannot collect into lists.
#[derive(Debug, Clone)]
pub struct SearchQueryExtractor(pub SearchRestaurantsQuery);

impl<S> FromRequestParts<S> for SearchQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("invalid query string: {e}")))?;

        Ok(SearchQueryExtractor(SearchRestaurantsQuery::from_pairs(&pairs)))
    }
}
