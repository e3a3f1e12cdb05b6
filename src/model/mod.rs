//! Wire-level types shared by the API surface: request/response DTOs and the closed
//! vocabularies (regions, ranks, roles, contact methods) submissions are checked against.

pub mod api;
pub mod application;
