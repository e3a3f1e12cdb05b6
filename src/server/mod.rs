//! Server-side API backend and business logic.
//!
//! This module contains the backend for the join-application service: the submission
//! endpoint, validation, persistence with file fallback, and chat notification. The
//! backend uses Axum as the web framework, SeaORM for the relational store, and reqwest
//! for the Telegram Bot API.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, backend selection, orchestration, notification
//! - **Data Layer** (`data/`) - Relational repository and JSON file store
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (storage router, notifier)
//! - **Startup** (`startup`) - Tracing, database connection, and service initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the submission and routes it to the controller
//! 2. **Controller** hands the raw body to `ApplicationService`
//! 3. **Service** parses and validates, then asks the `StorageRouter` to persist
//! 4. **Data** writes to the relational store, or the file store once it has degraded
//! 5. **Service** dispatches the notification on a background task
//! 6. **Controller** converts the stored application to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
