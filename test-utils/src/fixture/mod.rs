//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Raw submission body as the join form posts it
//! let mut body = fixture::application::submission();
//! body["contactMethod"] = "Telegram".into();
//!
//! // In-memory entity model (no DB)
//! let row = fixture::application::entity();
//! ```

pub mod application;

pub use application::{entity as application_entity, submission as application_submission};
