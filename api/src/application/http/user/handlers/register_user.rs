use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::RegisterUserValidator;
use axum::extract::State;
use dinesafely_core::domain::user::entities::User;
use dinesafely_core::domain::user::ports::UserService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RegisterUserResponse {
    pub data: User,
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "user",
    summary = "Register user",
    description = "Creates the account and its profile. Every violated password rule is reported.",
    request_body = RegisterUserValidator,
    responses(
        (status = 201, body = RegisterUserResponse),
        (status = 400, description = "Invalid input or weak password"),
        (status = 409, description = "Username or e-mail already taken"),
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterUserValidator>,
) -> Result<Response<RegisterUserResponse>, ApiError> {
    let user = state
        .service
        .register_user(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RegisterUserResponse { data: user }))
}
