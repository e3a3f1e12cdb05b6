use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        application::{ApplicationCreatedDto, SubmitApplicationDto},
    },
    server::{error::AppError, service::application::ApplicationService, state::AppState},
};

/// Tag for grouping application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

/// Submit a join application.
///
/// Validates the submission, stores it on the active storage backend, and queues a
/// notification to the team chat. The body is taken as raw bytes so malformed JSON is
/// answered with the same response shape as every other failure.
///
/// # Arguments
/// - `state` - Application state containing the storage router and notifier
/// - `body` - Raw JSON submission
///
/// # Returns
/// - `200 OK` - Application stored, with its assigned id
/// - `400 Bad Request` - Malformed JSON or failed validation
/// - `500 Internal Server Error` - Neither storage backend could store the application
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = SubmitApplicationDto,
    responses(
        (status = 200, description = "Application stored", body = ApplicationCreatedDto),
        (status = 400, description = "Malformed payload or validation failure", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_application(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let service = ApplicationService::new(&state.storage, &state.notifier);

    let application = service.submit(&body).await?;

    Ok((
        StatusCode::OK,
        Json(ApplicationCreatedDto::new(application.id)),
    ))
}
