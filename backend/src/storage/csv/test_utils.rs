//! Test utilities for CSV storage tests
//!
//! Provides RAII-based cleanup so test data is removed even if a test panics.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::connection::CsvConnection;
use super::todo_repository::CsvTodoRepository;

/// RAII test environment; the temporary directory is removed on drop
pub struct TestEnvironment {
    /// Kept alive until the environment is dropped
    _temp_dir: TempDir,
    pub connection: CsvConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::new(base_path.join("data.csv"));

        TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        }
    }

    /// Repository over this environment's data file, initialized
    pub async fn repository(&self) -> CsvTodoRepository {
        use crate::storage::TodoStorage;

        let repo = CsvTodoRepository::new(self.connection.clone());
        repo.initialize().await.expect("Failed to initialize repository");
        repo
    }

    pub fn data_file(&self) -> &Path {
        self.connection.data_file_path()
    }

    /// Raw contents of the data file
    pub fn read_data_file(&self) -> String {
        std::fs::read_to_string(self.data_file()).expect("Failed to read data file")
    }
}
