//! # Storage Factory
//!
//! The single place where a concrete todo storage backend is chosen.

use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

use super::csv::{CsvConnection, CsvTodoRepository};
use super::memory::MemoryTodoRepository;
use super::traits::TodoStorage;
use crate::config::AppConfig;

/// Which storage backend serves the todos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryMode {
    #[default]
    Memory,
    CsvFile,
}

impl RepositoryMode {
    pub const MEMORY: &'static str = "mem";
    pub const CSV_FILE: &'static str = "csv";

    /// Map a configuration value to a mode. Empty or unknown values fall back
    /// to the in-memory backend.
    pub fn from_config_value(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            Self::MEMORY => RepositoryMode::Memory,
            Self::CSV_FILE => RepositoryMode::CsvFile,
            "" => RepositoryMode::Memory,
            other => {
                warn!("Unknown repository mode '{}', using '{}'", other, Self::MEMORY);
                RepositoryMode::Memory
            }
        }
    }
}

impl fmt::Display for RepositoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryMode::Memory => f.write_str(Self::MEMORY),
            RepositoryMode::CsvFile => f.write_str(Self::CSV_FILE),
        }
    }
}

/// Instantiate the storage backend selected by `config`
pub fn create_todo_storage(config: &AppConfig) -> Arc<dyn TodoStorage> {
    let mode = RepositoryMode::from_config_value(&config.repository_mode);
    info!("Using '{}' todo storage", mode);

    match mode {
        RepositoryMode::Memory => Arc::new(MemoryTodoRepository::new()),
        RepositoryMode::CsvFile => {
            Arc::new(CsvTodoRepository::new(CsvConnection::new(&config.data_file)))
        }
    }
}
