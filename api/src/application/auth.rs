use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use dinesafely_core::domain::authentication::{ports::AuthService, value_objects::Identity};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[derive(Debug, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token not found")]
    TokenNotFound,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: u16,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = StatusCode::UNAUTHORIZED;
        let error_response = ErrorResponse {
            code: "E_UNAUTHORIZED".to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    Ok(bearer.token().to_string())
}

/// Resolves the bearer token, when one is sent, into an [`Identity`] stored in
/// the request extensions. Requests without a token continue anonymously; a
/// token that does not verify is rejected.
pub async fn auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let (mut parts, body) = req.into_parts();

    let token = match extract_token_from_bearer(&mut parts).await {
        Ok(token) if !token.is_empty() => Some(token),
        _ => None,
    };

    if let Some(token) = token {
        let identity = state.service.authorize_request(token).await.map_err(|e| {
            debug!("Bearer token rejected: {}", e);
            AuthError::InvalidToken
        })?;

        parts.extensions.insert(identity);
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Caller identity for endpoints that work anonymously too.
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}

/// Caller identity for endpoints that need an authenticated user.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| {
                ApiError::Unauthorized(
                    "Authentication required: provide an Authorization header".to_string(),
                )
            })
    }
}
