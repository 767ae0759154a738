use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use dinesafely_core::domain::health::entities::DatabaseHealthStatus;
use dinesafely_core::domain::health::ports::HealthCheckService;

#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 500, description = "Database unreachable"),
    ),
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
