use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub database: String,
    pub status: String,
    pub response_time_ms: u64,
}
