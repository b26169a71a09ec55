//! # REST API Interface Layer
//!
//! HTTP endpoints for todos under `/api/v1`. Translates JSON DTOs to domain
//! commands and domain errors to status codes with a JSON error envelope.

pub mod mappers;
pub mod todo_apis;

pub use todo_apis::*;
