//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod notify;
pub mod storage;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ValidationErrorDto},
    server::error::{config::ConfigError, storage::FileStoreError, validation::ValidationError},
};

/// Generic, localized message returned for every server-side failure.
pub const SERVER_FAILURE_MESSAGE: &str = "حدث خطأ أثناء معالجة الطلب. حاول مرة أخرى.";

/// Message returned when the request body cannot be parsed.
pub const MALFORMED_PAYLOAD_MESSAGE: &str = "Malformed JSON payload";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The request body is not valid JSON or its top level is not an object.
    ///
    /// Results in 400 Bad Request with a fixed message; parser details stay in the logs.
    #[error("Malformed application payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// Submission rejected by the validator.
    ///
    /// Results in 400 Bad Request with the messages grouped by field.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Neither storage backend could persist the application.
    ///
    /// Results in 500 Internal Server Error with the generic localized message.
    #[error(transparent)]
    StorageErr(#[from] FileStoreError),

    /// Database operation error from SeaORM, raised during startup.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Socket or filesystem error outside the storage path (binding the listener, serving).
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `ValidationErr` (field-grouped messages) and `MalformedPayload`
/// - 500 Internal Server Error - For all other variants, with details logged server-side
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => {
                tracing::debug!("Rejected application: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorDto::new(err.into_field_map())),
                )
                    .into_response()
            }
            Self::MalformedPayload(err) => {
                tracing::debug!("Malformed application payload: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::new(MALFORMED_PAYLOAD_MESSAGE)),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns the generic localized failure message so backend
/// details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(SERVER_FAILURE_MESSAGE)),
        )
            .into_response()
    }
}
