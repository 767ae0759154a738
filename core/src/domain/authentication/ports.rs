use std::future::Future;

use crate::domain::{
    authentication::{entities::JwtClaim, value_objects::Identity},
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError>;
}

pub trait AuthService: Send + Sync {
    fn authorize_request(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
