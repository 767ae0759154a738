use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::domain::{
    common::{MetadataApiConfig, entities::app_errors::CoreError},
    restaurant::{entities::RestaurantMetadata, ports::RestaurantMetadataClient},
};

/// Business lookup against a Yelp Fusion compatible API.
#[derive(Debug, Clone)]
pub struct YelpMetadataClient {
    base_url: String,
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct BusinessResponse {
    id: String,
    #[serde(default)]
    categories: Vec<Category>,
    location: Option<Location>,
    rating: Option<f64>,
    price: Option<String>,
    review_count: Option<u64>,
    image_url: Option<String>,
    url: Option<String>,
    display_phone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Category {
    alias: String,
}

#[derive(Debug, Deserialize)]
struct Location {
    city: Option<String>,
}

impl From<BusinessResponse> for RestaurantMetadata {
    fn from(business: BusinessResponse) -> Self {
        Self {
            business_id: business.id,
            categories: business.categories.into_iter().map(|c| c.alias).collect(),
            neighborhood: business
                .location
                .and_then(|l| l.city)
                .filter(|city| !city.trim().is_empty()),
            rating: business.rating,
            price: business.price,
            review_count: business.review_count,
            image_url: business.image_url.filter(|u| !u.is_empty()),
            url: business.url,
            phone: business.display_phone.filter(|p| !p.is_empty()),
        }
    }
}

impl YelpMetadataClient {
    pub fn new(config: &MetadataApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }
}

impl RestaurantMetadataClient for YelpMetadataClient {
    async fn fetch_metadata(&self, business_id: String) -> Result<RestaurantMetadata, CoreError> {
        let url = format!("{}/businesses/{}", self.base_url, business_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Metadata API request failed: {}", e);
                CoreError::UpstreamUnavailable(format!("metadata API error: {}", e))
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(CoreError::UpstreamUnavailable(format!(
                    "metadata API has no business {business_id}"
                )));
            }
            status if !status.is_success() => {
                let error_text = response.text().await.unwrap_or_default();
                tracing::error!("Metadata API error: {} - {}", status, error_text);
                return Err(CoreError::UpstreamUnavailable(format!(
                    "metadata API returned {status}"
                )));
            }
            _ => {}
        }

        let business: BusinessResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse metadata response: {}", e);
            CoreError::UpstreamUnavailable(format!("failed to parse metadata response: {}", e))
        })?;

        Ok(business.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_mapping() {
        let body = r#"{
            "id": "joes-pizza-new-york",
            "categories": [{"alias": "pizza", "title": "Pizza"}, {"alias": "italian", "title": "Italian"}],
            "location": {"city": "New York", "zip_code": "10014"},
            "rating": 4.5,
            "price": "$",
            "review_count": 1200,
            "image_url": "",
            "url": "https://example.com/joes",
            "display_phone": "(212) 366-1182"
        }"#;

        let business: BusinessResponse = serde_json::from_str(body).unwrap();
        let metadata = RestaurantMetadata::from(business);

        assert_eq!(metadata.business_id, "joes-pizza-new-york");
        assert_eq!(metadata.categories, vec!["pizza", "italian"]);
        assert_eq!(metadata.neighborhood.as_deref(), Some("New York"));
        assert_eq!(metadata.rating, Some(4.5));
        assert_eq!(metadata.review_count, Some(1200));
        assert!(metadata.image_url.is_none());
    }

    #[test]
    fn test_sparse_business_mapping() {
        let business: BusinessResponse = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        let metadata = RestaurantMetadata::from(business);

        assert!(metadata.categories.is_empty());
        assert!(metadata.neighborhood.is_none());
        assert!(metadata.price.is_none());
    }
}
