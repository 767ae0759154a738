use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
    time::{Duration, Instant},
};

use csv::{ReaderBuilder, Trim};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::{CovidDataConfig, entities::app_errors::CoreError},
    restaurant::{
        entities::{CovidZone, zip5},
        ports::CovidZoneClient,
    },
};

/// NYC Health seven-day testing figures, downloaded as one CSV and indexed by
/// `modzcta`. The parsed table is reused until it is older than the cache TTL.
#[derive(Debug, Clone)]
pub struct CsvCovidZoneClient {
    csv_url: String,
    cache_ttl: Duration,
    client: Client,
    cache: Arc<RwLock<Option<CachedZones>>>,
}

#[derive(Debug)]
struct CachedZones {
    fetched_at: Instant,
    zones: Arc<HashMap<String, CovidZone>>,
}

#[derive(Debug, Deserialize)]
struct ZoneRow {
    modzcta: String,
    #[serde(default)]
    modzcta_name: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    percentpositivity_7day: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    people_tested: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    people_positive: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    median_daily_test_rate: Option<f64>,
    #[serde(default)]
    adequately_tested: Option<String>,
}

fn count(value: Option<f64>) -> Option<u64> {
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.round() as u64)
}

impl From<ZoneRow> for CovidZone {
    fn from(row: ZoneRow) -> Self {
        Self {
            zcta: row.modzcta.trim().to_string(),
            name: row.modzcta_name,
            percent_positivity_7day: row.percentpositivity_7day,
            people_tested: count(row.people_tested),
            people_positive: count(row.people_positive),
            median_daily_test_rate: row.median_daily_test_rate,
            adequately_tested: row.adequately_tested.filter(|s| !s.is_empty()),
        }
    }
}

/// Parses the CSV body into zones keyed by `modzcta`. Rows that cannot be
/// read are skipped; a body without a `modzcta` header is an error.
fn parse_zones(body: &str) -> Result<HashMap<String, CovidZone>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    if !reader.headers()?.iter().any(|h| h == "modzcta") {
        return Err(csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "missing modzcta column",
        )));
    }

    let mut zones = HashMap::new();
    for result in reader.deserialize::<ZoneRow>() {
        match result {
            Ok(row) => {
                let zone = CovidZone::from(row);
                zones.insert(zone.zcta.clone(), zone);
            }
            Err(e) => tracing::debug!("skipping unreadable COVID row: {}", e),
        }
    }

    Ok(zones)
}

impl CsvCovidZoneClient {
    pub fn new(config: &CovidDataConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            csv_url: config.csv_url.clone(),
            cache_ttl: Duration::from_secs(config.cache_ttl_secs),
            client,
            cache: Arc::new(RwLock::new(None)),
        })
    }

    fn cached(&self) -> Option<Arc<HashMap<String, CovidZone>>> {
        let guard = self.cache.read().ok()?;
        guard
            .as_ref()
            .filter(|cached| cached.fetched_at.elapsed() < self.cache_ttl)
            .map(|cached| Arc::clone(&cached.zones))
    }

    fn store(&self, zones: Arc<HashMap<String, CovidZone>>) {
        let mut guard = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(CachedZones {
            fetched_at: Instant::now(),
            zones,
        });
    }

    async fn zones(&self) -> Result<Arc<HashMap<String, CovidZone>>, CoreError> {
        if let Some(zones) = self.cached() {
            return Ok(zones);
        }

        let response = self.client.get(&self.csv_url).send().await.map_err(|e| {
            tracing::error!("COVID data request failed: {}", e);
            CoreError::UpstreamUnavailable(format!("COVID data error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("COVID data error: {}", status);
            return Err(CoreError::UpstreamUnavailable(format!(
                "COVID data returned {status}"
            )));
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read COVID data: {}", e);
            CoreError::UpstreamUnavailable(format!("failed to read COVID data: {}", e))
        })?;

        let zones = Arc::new(parse_zones(&body).map_err(|e| {
            tracing::error!("Failed to parse COVID data: {}", e);
            CoreError::UpstreamUnavailable(format!("failed to parse COVID data: {}", e))
        })?);

        self.store(Arc::clone(&zones));
        Ok(zones)
    }
}

impl CovidZoneClient for CsvCovidZoneClient {
    async fn fetch_zone(&self, postcode: String) -> Result<Option<CovidZone>, CoreError> {
        let Some(zip) = zip5(&postcode) else {
            return Ok(None);
        };

        let zones = self.zones().await?;
        Ok(zones.get(zip).cloned())
    }
}
