//! Submission orchestration.
//!
//! `ApplicationService` drives one submission end to end: parse the raw body, validate,
//! persist through the storage router, then hand the stored application to the notifier.
//! The submitter's outcome is decided once persistence returns; notification runs on its
//! own task and its failures are only logged.

use serde_json::Value;
use tokio::task::JoinHandle;

use crate::{
    model::application::SubmitApplicationDto,
    server::{
        error::AppError,
        model::application::Application,
        service::{
            notification::{ApplicationNotifier, NotifyOutcome},
            storage::StorageRouter,
            validation,
        },
    },
};

pub struct ApplicationService<'a> {
    storage: &'a StorageRouter,
    notifier: &'a ApplicationNotifier,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new ApplicationService instance.
    ///
    /// # Arguments
    /// - `storage` - Router selecting the backend for each write
    /// - `notifier` - Best-effort notification sink for stored applications
    ///
    /// # Returns
    /// - `ApplicationService` - New service instance
    pub fn new(storage: &'a StorageRouter, notifier: &'a ApplicationNotifier) -> Self {
        Self { storage, notifier }
    }

    /// Processes a raw submission body.
    ///
    /// Only a body that is not a JSON object is malformed; missing fields and values of the
    /// wrong JSON type are validation failures. Nothing is persisted unless validation
    /// passes. Once the application is stored the call succeeds, whatever later happens to
    /// the notification.
    ///
    /// # Arguments
    /// - `body` - Raw request body, expected to be a JSON object
    ///
    /// # Returns
    /// - `Ok(Application)` - The stored application with its assigned id
    /// - `Err(AppError::MalformedPayload)` - Body is not valid JSON or not a JSON object
    /// - `Err(AppError::ValidationErr)` - One or more fields failed validation
    /// - `Err(AppError::StorageErr)` - Neither backend could store the application
    pub async fn submit(&self, body: &[u8]) -> Result<Application, AppError> {
        let object: serde_json::Map<String, Value> =
            serde_json::from_slice(body).map_err(AppError::MalformedPayload)?;
        let dto: SubmitApplicationDto =
            serde_json::from_value(Value::Object(object)).map_err(AppError::MalformedPayload)?;

        let params = validation::validate(dto)?;

        let application = self.storage.save(params).await?;

        tracing::info!(
            "Stored application {} from {} ({:?})",
            application.id,
            application.in_game_name,
            self.storage.state()
        );

        self.dispatch_notification(application.clone());

        Ok(application)
    }

    /// Sends the notification for a stored application on a background task.
    ///
    /// # Arguments
    /// - `application` - The application that was just persisted
    ///
    /// # Returns
    /// - `JoinHandle<()>` - Handle to the notification task; dropping it does not cancel it
    pub fn dispatch_notification(&self, application: Application) -> JoinHandle<()> {
        let notifier = self.notifier.clone();

        tokio::spawn(async move {
            match notifier.notify(&application).await {
                Ok(NotifyOutcome::Sent) => {
                    tracing::debug!("Sent notification for application {}", application.id);
                }
                Ok(NotifyOutcome::Skipped) => {
                    tracing::debug!(
                        "Notifier not configured, skipped notification for application {}",
                        application.id
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to send notification for application {}: {}",
                        application.id,
                        e
                    );
                }
            }
        })
    }
}
