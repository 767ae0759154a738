use std::time::Duration;

use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::{InspectionApiConfig, entities::app_errors::CoreError},
    restaurant::{entities::InspectionRecord, ports::InspectionClient},
};

const SOCRATA_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// DOHMH restaurant inspection results served by a Socrata endpoint.
#[derive(Debug, Clone)]
pub struct SocrataInspectionClient {
    base_url: String,
    app_token: Option<String>,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct InspectionRow {
    building: Option<String>,
    street: Option<String>,
    inspection_date: Option<String>,
    action: Option<String>,
    violation_code: Option<String>,
    violation_description: Option<String>,
    critical_flag: Option<String>,
    score: Option<String>,
    grade: Option<String>,
}

impl From<InspectionRow> for InspectionRecord {
    fn from(row: InspectionRow) -> Self {
        Self {
            inspection_date: row
                .inspection_date
                .as_deref()
                .and_then(|d| NaiveDateTime::parse_from_str(d, SOCRATA_DATE_FORMAT).ok()),
            action: row.action,
            violation_code: row.violation_code,
            violation_description: row.violation_description,
            critical_flag: row.critical_flag,
            score: row.score.as_deref().and_then(|s| s.trim().parse().ok()),
            grade: row.grade,
        }
    }
}

/// Splits "7 Carmine St" into ("7", "CARMINE ST").
fn split_address(address: &str) -> (Option<String>, String) {
    let address = address.trim().to_uppercase();

    match address.split_once(char::is_whitespace) {
        Some((building, street)) if building.chars().any(|c| c.is_ascii_digit()) => {
            (Some(building.to_string()), street.trim().to_string())
        }
        _ => (None, address),
    }
}

/// Keeps rows whose building and street agree with the address. Rows that
/// lack the columns are kept.
fn matches_address(row: &InspectionRow, building: Option<&str>, street: &str) -> bool {
    let building_ok = match (building, row.building.as_deref()) {
        (Some(expected), Some(actual)) => expected.eq_ignore_ascii_case(actual.trim()),
        _ => true,
    };
    let street_ok = match row.street.as_deref() {
        Some(actual) if !street.is_empty() => {
            let actual = actual.trim().to_uppercase();
            actual.starts_with(street) || street.starts_with(&actual)
        }
        _ => true,
    };

    building_ok && street_ok
}

impl SocrataInspectionClient {
    pub fn new(config: &InspectionApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            app_token: config.app_token.clone(),
            client,
        })
    }
}

impl InspectionClient for SocrataInspectionClient {
    async fn fetch_records(
        &self,
        name: String,
        address: String,
        postcode: String,
    ) -> Result<Vec<InspectionRecord>, CoreError> {
        let dba = name.trim().to_uppercase();
        let mut request = self.client.get(&self.base_url).query(&[
            ("dba", dba.as_str()),
            ("zipcode", postcode.trim()),
            ("$order", "inspection_date DESC"),
        ]);

        if let Some(token) = &self.app_token {
            request = request.header("X-App-Token", token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Inspection API request failed: {}", e);
            CoreError::UpstreamUnavailable(format!("inspection API error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Inspection API error: {} - {}", status, error_text);
            return Err(CoreError::UpstreamUnavailable(format!(
                "inspection API returned {status}"
            )));
        }

        let rows: Vec<InspectionRow> = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse inspection response: {}", e);
            CoreError::UpstreamUnavailable(format!("failed to parse inspection response: {}", e))
        })?;

        let (building, street) = split_address(&address);

        Ok(rows
            .into_iter()
            .filter(|row| matches_address(row, building.as_deref(), &street))
            .map(InspectionRecord::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(building: Option<&str>, street: Option<&str>) -> InspectionRow {
        InspectionRow {
            building: building.map(str::to_string),
            street: street.map(str::to_string),
            inspection_date: None,
            action: None,
            violation_code: None,
            violation_description: None,
            critical_flag: None,
            score: None,
            grade: None,
        }
    }

    #[test]
    fn test_row_mapping() {
        let body = r#"[{
            "camis": "41234567",
            "dba": "JOE'S PIZZA",
            "building": "7",
            "street": "CARMINE STREET",
            "inspection_date": "2019-05-14T00:00:00.000",
            "action": "Violations were cited in the following area(s).",
            "violation_code": "10F",
            "critical_flag": "Not Critical",
            "score": "12",
            "grade": "A"
        }]"#;

        let rows: Vec<InspectionRow> = serde_json::from_str(body).unwrap();
        let record = InspectionRecord::from(rows.into_iter().next().unwrap());

        assert_eq!(
            record.inspection_date.map(|d| d.date().to_string()).as_deref(),
            Some("2019-05-14")
        );
        assert_eq!(record.score, Some(12));
        assert_eq!(record.grade.as_deref(), Some("A"));
        assert!(record.violation_description.is_none());
    }

    #[test]
    fn test_unparseable_score_is_none() {
        let mut raw = row(None, None);
        raw.score = Some("n/a".to_string());
        assert!(InspectionRecord::from(raw).score.is_none());
    }

    #[test]
    fn test_split_address() {
        assert_eq!(
            split_address("7 Carmine St"),
            (Some("7".to_string()), "CARMINE ST".to_string())
        );
        assert_eq!(split_address("Pier 17"), (None, "PIER 17".to_string()));
    }

    #[test]
    fn test_address_filter() {
        let (building, street) = split_address("7 Carmine St");

        assert!(matches_address(&row(Some("7"), Some("CARMINE STREET")), building.as_deref(), &street));
        assert!(!matches_address(&row(Some("9"), Some("CARMINE STREET")), building.as_deref(), &street));
        assert!(!matches_address(&row(Some("7"), Some("BLEECKER ST")), building.as_deref(), &street));
        assert!(matches_address(&row(None, None), building.as_deref(), &street));
    }
}
