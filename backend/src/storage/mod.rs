//! # Storage Module
//!
//! Handles all todo persistence.
//!
//! The domain layer depends only on [`TodoStorage`]; the concrete backend is
//! picked once at startup by [`factory::create_todo_storage`].
//!
//! ## Backends
//!
//! - **memory**: process-local vector, cleared on start
//! - **csv**: one flat CSV file, rewritten on update and delete

pub mod csv;
pub mod error;
pub mod factory;
pub mod memory;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use factory::{create_todo_storage, RepositoryMode};
pub use memory::MemoryTodoRepository;
pub use traits::TodoStorage;
