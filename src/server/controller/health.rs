use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{HealthDto, StorageBackendDto},
    server::{service::storage::BackendState, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report service liveness and the storage backend currently receiving writes.
///
/// # Returns
/// - `200 OK` - Service is up; `storage` is `primary` or `fallback`
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let storage = match state.storage.state() {
        BackendState::PrimaryActive => StorageBackendDto::Primary,
        BackendState::FallbackOnly => StorageBackendDto::Fallback,
    };

    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            storage,
        }),
    )
}
