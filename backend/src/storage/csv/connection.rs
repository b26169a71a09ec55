use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::storage::error::StorageResult;

/// CsvConnection manages the location of the todo data file
#[derive(Debug, Clone)]
pub struct CsvConnection {
    data_file: PathBuf,
}

impl CsvConnection {
    /// Create a new CSV connection for the given data file
    pub fn new<P: AsRef<Path>>(data_file: P) -> Self {
        Self {
            data_file: data_file.as_ref().to_path_buf(),
        }
    }

    /// Get the data file path
    pub fn data_file_path(&self) -> &Path {
        &self.data_file
    }

    /// Scratch file used while rewriting, next to the data file
    pub fn temp_file_path(&self) -> PathBuf {
        let mut file_name = self
            .data_file
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| OsString::from("todos"));
        file_name.push(".tmp");
        self.data_file.with_file_name(file_name)
    }

    pub fn data_file_exists(&self) -> bool {
        self.data_file.is_file()
    }

    /// Ensure the data file and its parent directory exist.
    /// An existing file is left untouched.
    pub fn ensure_data_file_exists(&self) -> StorageResult<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                info!("Created data directory {}", parent.display());
            }
        }

        if !self.data_file.exists() {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.data_file)?;
            info!("Created todo data file {}", self.data_file.display());
        }

        Ok(())
    }
}
