//! Persistence backends for stored applications.
//!
//! `application` holds the relational repository built on SeaORM entity models;
//! `file_store` holds the flat JSON file used when the relational store is absent or has
//! failed. Both return the same `Application` domain model so callers never see which
//! backend served a write.

pub mod application;
pub mod file_store;

#[cfg(test)]
mod test;
