use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Health/safety compliance flag of a restaurant, synced from the inspection data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    Unknown,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "COMPLIANT",
            ComplianceStatus::NonCompliant => "NON_COMPLIANT",
            ComplianceStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "COMPLIANT" => Ok(ComplianceStatus::Compliant),
            "NON_COMPLIANT" | "NON-COMPLIANT" => Ok(ComplianceStatus::NonCompliant),
            "UNKNOWN" => Ok(ComplianceStatus::Unknown),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Restaurant {
    pub id: Uuid,
    pub business_id: String,
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub compliance: ComplianceStatus,
    pub neighborhood: Option<String>,
    pub categories: Vec<String>,
    pub rating: Option<f64>,
    pub price: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RestaurantConfig {
    pub business_id: String,
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub compliance: ComplianceStatus,
    pub neighborhood: Option<String>,
    pub categories: Vec<String>,
    pub rating: Option<f64>,
    pub price: Option<String>,
}

impl Restaurant {
    pub fn new(config: RestaurantConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            business_id: config.business_id,
            name: config.name,
            address: config.address,
            postcode: config.postcode,
            compliance: config.compliance,
            neighborhood: config.neighborhood,
            categories: config.categories,
            rating: config.rating,
            price: config.price,
            latitude: None,
            longitude: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Compact restaurant representation used in lists and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantSummary {
    pub id: Uuid,
    pub business_id: String,
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub compliance: ComplianceStatus,
    pub neighborhood: Option<String>,
    pub categories: Vec<String>,
    pub rating: Option<f64>,
    pub price: Option<String>,
}

impl From<&Restaurant> for RestaurantSummary {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id,
            business_id: restaurant.business_id.clone(),
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
            postcode: restaurant.postcode.clone(),
            compliance: restaurant.compliance,
            neighborhood: restaurant.neighborhood.clone(),
            categories: restaurant.categories.clone(),
            rating: restaurant.rating,
            price: restaurant.price.clone(),
        }
    }
}

impl From<Restaurant> for RestaurantSummary {
    fn from(restaurant: Restaurant) -> Self {
        Self::from(&restaurant)
    }
}

/// Third-party business metadata keyed by `business_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantMetadata {
    pub business_id: String,
    pub categories: Vec<String>,
    pub neighborhood: Option<String>,
    pub rating: Option<f64>,
    pub price: Option<String>,
    pub review_count: Option<u64>,
    pub image_url: Option<String>,
    pub url: Option<String>,
    pub phone: Option<String>,
}

/// One row of the government inspection dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InspectionRecord {
    pub inspection_date: Option<NaiveDateTime>,
    pub action: Option<String>,
    pub violation_code: Option<String>,
    pub violation_description: Option<String>,
    pub critical_flag: Option<String>,
    pub score: Option<i32>,
    pub grade: Option<String>,
}

/// COVID-19 testing figures of one modified ZIP code tabulation area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CovidZone {
    pub zcta: String,
    pub name: String,
    pub percent_positivity_7day: Option<f64>,
    pub people_tested: Option<u64>,
    pub people_positive: Option<u64>,
    pub median_daily_test_rate: Option<f64>,
    pub adequately_tested: Option<String>,
}

/// Five-digit ZIP of a postcode such as `10014` or `10014-2712`.
pub fn zip5(postcode: &str) -> Option<&str> {
    let zip = postcode.trim().get(..5)?;
    zip.chars().all(|c| c.is_ascii_digit()).then_some(zip)
}
