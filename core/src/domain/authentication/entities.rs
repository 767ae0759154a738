use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by the bearer tokens issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    #[serde(default)]
    pub preferred_username: Option<String>,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
}
