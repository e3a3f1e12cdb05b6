use thiserror::Error;

/// Failure delivering an application summary to the messaging endpoint.
///
/// Never surfaced to the submitter; the orchestrator logs it and moves on.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Transport failure, including timeouts.
    #[error("Failed to reach messaging endpoint: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Messaging API error ({status}): {body}")]
    Api {
        /// HTTP status returned by the endpoint
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },
}
