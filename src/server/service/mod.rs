//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Turning untrusted submissions into validated parameters
//! - **Backend Selection**: Routing writes to the relational store or the file fallback
//! - **Orchestration**: Coordinating validation, persistence, and notification
//! - **Notification**: Best-effort delivery of stored applications to the team chat

pub mod application;
pub mod notification;
pub mod storage;
pub mod validation;

#[cfg(test)]
mod test;
