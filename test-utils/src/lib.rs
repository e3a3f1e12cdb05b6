//! Titan Core Test Utils
//!
//! Provides shared testing utilities for the application persistence tests. This crate
//! offers a builder pattern for creating test contexts with in-memory SQLite databases,
//! factories for seeding stored applications, and fixtures for raw submission payloads.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting entity rows with sensible defaults
//! - **fixture**: Submission payloads as posted by the join form
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn stores_application() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_application_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
