use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto, StorageBackendDto, ValidationErrorDto},
        application::{
            ApplicationCreatedDto, ContactMethod, Rank, Region, Role, SubmitApplicationDto,
        },
    },
    server::{
        controller::{application, health},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Titan Core Applications API"),
    paths(application::submit_application, health::health),
    components(schemas(
        SubmitApplicationDto,
        ApplicationCreatedDto,
        ValidationErrorDto,
        ErrorDto,
        HealthDto,
        StorageBackendDto,
        Region,
        Rank,
        Role,
        ContactMethod
    )),
    tags(
        (name = "application", description = "Join application submission"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/applications", post(application::submit_application))
        .route("/api/health", get(health::health))
        .route("/api/openapi.json", get(openapi))
}

/// Builds the complete application with state and HTTP middleware applied.
///
/// # Arguments
/// - `state` - Shared application state
///
/// # Returns
/// - `Router` - Ready-to-serve router
pub fn build_app(state: AppState) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
