//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting entity rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let application = factory::create_application(&db).await?;
//!
//!     // Customize through the builder
//!     let application = factory::application::ApplicationFactory::new(&db)
//!         .in_game_name("Viper")
//!         .roles("IGL, Sniper")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `application` - Create stored application rows
//! - `helpers` - Shared id generation

pub mod application;
pub mod helpers;

pub use application::create_application;
