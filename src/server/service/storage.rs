//! Backend selection with sticky degradation.
//!
//! `StorageRouter` owns both backends and decides per call which one receives a write.
//! It starts in `BackendState::PrimaryActive` when a relational store is available and
//! moves to `BackendState::FallbackOnly` on the first primary failure. That transition is
//! one-way for the lifetime of the router: the primary is never retried, so a process
//! never flips between two independent id spaces.

use sea_orm::DatabaseConnection;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::server::{
    data::{application::ApplicationRepository, file_store::ApplicationFileStore},
    error::storage::FileStoreError,
    model::application::{Application, CreateApplicationParams},
};

/// Which backend the router will try first on the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendState {
    /// Writes go to the relational store, falling back to the file on failure.
    PrimaryActive,
    /// Writes go straight to the file store.
    FallbackOnly,
}

pub struct StorageRouter {
    /// Relational store; `None` when file mode is forced or no database is configured.
    primary: Option<DatabaseConnection>,
    fallback: ApplicationFileStore,
    /// Set once by the first failing primary write and never cleared.
    primary_disabled: AtomicBool,
}

impl StorageRouter {
    /// Creates a router over an optional relational store and the file store.
    ///
    /// # Arguments
    /// - `primary` - Relational store connection, or `None` to use the file store only
    /// - `fallback` - File store used when the primary is absent or has failed
    pub fn new(primary: Option<DatabaseConnection>, fallback: ApplicationFileStore) -> Self {
        Self {
            primary,
            fallback,
            primary_disabled: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> BackendState {
        if self.primary.is_some() && !self.primary_disabled.load(Ordering::Acquire) {
            BackendState::PrimaryActive
        } else {
            BackendState::FallbackOnly
        }
    }

    /// Permanently routes all further writes to the file store.
    ///
    /// Concurrent callers may race to disable the primary; they all converge on the same
    /// state, and only the first one logs the transition.
    pub fn disable_primary(&self) {
        if !self.primary_disabled.swap(true, Ordering::AcqRel) && self.primary.is_some() {
            tracing::warn!(
                "Primary store disabled, all further applications go to {}",
                self.fallback.path().display()
            );
        }
    }

    /// Persists an application on the active backend.
    ///
    /// Tries the relational store while it is active. On any primary failure the router
    /// degrades to `FallbackOnly` and this same call is written to the file store; the
    /// primary is not retried.
    ///
    /// # Arguments
    /// - `params` - Validated application to persist
    ///
    /// # Returns
    /// - `Ok(Application)` - Stored application with the id assigned by the backend used
    /// - `Err(FileStoreError)` - The file store failed, so both backends are exhausted
    pub async fn save(
        &self,
        params: CreateApplicationParams,
    ) -> Result<Application, FileStoreError> {
        if let (BackendState::PrimaryActive, Some(db)) = (self.state(), self.primary.as_ref()) {
            match ApplicationRepository::new(db).create(&params).await {
                Ok(application) => return Ok(application),
                Err(e) => {
                    tracing::error!(
                        "Primary store failed, falling back to file storage: {}",
                        e
                    );
                    self.disable_primary();
                }
            }
        }

        self.fallback.append(params).await
    }
}
