use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use crate::domain::{
    authentication::{entities::JwtClaim, ports::TokenVerifier},
    common::entities::app_errors::CoreError,
};

/// Verifies HS256 bearer tokens signed with a shared secret.
#[derive(Clone)]
pub struct Hs256TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl Hs256TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl TokenVerifier for Hs256TokenVerifier {
    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        decode::<JwtClaim>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Rejected bearer token: {}", e);
                CoreError::Unauthorized
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    use super::*;

    fn token(secret: &str, exp: i64) -> (Uuid, String) {
        let sub = Uuid::new_v4();
        let claims = JwtClaim {
            sub,
            preferred_username: Some("ana".to_string()),
            exp,
            iat: Some(Utc::now().timestamp()),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        (sub, token)
    }

    #[test]
    fn test_valid_token() {
        let verifier = Hs256TokenVerifier::new("secret");
        let (sub, token) = token("secret", (Utc::now() + Duration::hours(1)).timestamp());

        let claims = verifier.verify(&token).unwrap();
        assert_eq!(claims.sub, sub);
        assert_eq!(claims.preferred_username.as_deref(), Some("ana"));
    }

    #[test]
    fn test_expired_token() {
        let verifier = Hs256TokenVerifier::new("secret");
        let (_, token) = token("secret", (Utc::now() - Duration::hours(1)).timestamp());

        assert!(matches!(verifier.verify(&token), Err(CoreError::Unauthorized)));
    }

    #[test]
    fn test_wrong_secret() {
        let verifier = Hs256TokenVerifier::new("secret");
        let (_, token) = token("other", (Utc::now() + Duration::hours(1)).timestamp());

        assert!(matches!(verifier.verify(&token), Err(CoreError::Unauthorized)));
    }

    #[test]
    fn test_garbage_token() {
        let verifier = Hs256TokenVerifier::new("secret");
        assert!(matches!(verifier.verify("abc.def"), Err(CoreError::Unauthorized)));
    }
}
