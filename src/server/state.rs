//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use std::sync::Arc;

use super::service::{notification::ApplicationNotifier, storage::StorageRouter};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `Arc<StorageRouter>` shares one router, so the sticky fallback state is process-wide
/// - `ApplicationNotifier` wraps a `reqwest::Client`, which uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Storage router selecting the backend for each write.
    pub storage: Arc<StorageRouter>,

    /// Notifier posting stored applications to the team chat.
    pub notifier: ApplicationNotifier,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `storage` - Storage router owning both backends
    /// - `notifier` - Notification service
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(storage: StorageRouter, notifier: ApplicationNotifier) -> Self {
        Self {
            storage: Arc::new(storage),
            notifier,
        }
    }
}
