use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod policies;
pub mod services;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Debug)]
pub struct DineSafelyConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub metadata: MetadataApiConfig,
    pub inspection: InspectionApiConfig,
    pub covid: CovidDataConfig,
    pub chatbot: ChatbotConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

#[derive(Clone, Debug)]
pub struct MetadataApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct InspectionApiConfig {
    pub base_url: String,
    pub app_token: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct CovidDataConfig {
    /// CSV of testing figures keyed by `modzcta`.
    pub csv_url: String,
    pub timeout_secs: u64,
    pub cache_ttl_secs: u64,
}

#[derive(Clone, Debug, Default)]
pub struct ChatbotConfig {
    /// Fixed seed for the chatbot sampler. `None` draws from the thread rng.
    pub seed: Option<u64>,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
