//! # Domain Module
//!
//! Business rules for todos, independent of HTTP and of the storage backend.
//!
//! - **todo_service**: validation, ordering, delegation to [`crate::storage::TodoStorage`]
//! - **commands**: inputs the REST layer maps its DTOs into
//! - **models**: the [`models::todo::Todo`] entity

pub mod commands;
pub mod models;
pub mod todo_service;

pub use commands::*;
pub use todo_service::*;
