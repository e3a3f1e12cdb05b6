//! HTTP request handlers.
//!
//! Controllers extract request data, delegate to the service layer, and convert domain
//! models to DTOs. Failures are returned as `AppError` and mapped to responses there.

pub mod application;
pub mod health;
