//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and from
//! stored JSON records in the file store, then transformed to DTOs at the controller
//! boundary.

pub mod application;
