use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Generic failure body, used for malformed payloads and server failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Validation failure body with messages grouped by field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub success: bool,
    pub message: String,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrorDto {
    pub fn new(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            success: false,
            message: "Validation failed".to_string(),
            errors,
        }
    }
}

/// Storage backend currently serving writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackendDto {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub storage: StorageBackendDto,
}
