//! # Storage Traits
//!
//! The storage abstraction the domain layer works against. Backends are
//! interchangeable; the REST and domain layers never know which one is active.

use async_trait::async_trait;

use super::error::StorageResult;
use crate::domain::models::todo::Todo;

/// Trait defining the interface for todo storage operations
///
/// Implementations own their todos exclusively and hand out copies. Each
/// implementation serializes its operations behind one lock per instance, so
/// a read-modify-write cycle is never interleaved with another caller's.
#[async_trait]
pub trait TodoStorage: Send + Sync {
    /// Prepare the backend for use. Called once at startup.
    async fn initialize(&self) -> StorageResult<()>;

    /// All stored todos, in storage order
    async fn list_todos(&self) -> StorageResult<Vec<Todo>>;

    /// Retrieve a todo by id, `NotFound` when absent
    async fn get_todo(&self, id: &str) -> StorageResult<Todo>;

    /// Store a new todo under a freshly assigned id.
    /// Any id carried by `todo` is ignored.
    async fn create_todo(&self, todo: Todo) -> StorageResult<Todo>;

    /// Replace all fields of the todo with `id`, keeping the id
    async fn update_todo(&self, id: &str, todo: Todo) -> StorageResult<Todo>;

    /// Remove the todo with `id` and return it
    async fn delete_todo(&self, id: &str) -> StorageResult<Todo>;
}
