//! # CSV Todo Repository
//!
//! File-based todo storage. Nothing is cached between calls: every operation
//! re-reads the data file, and updates/deletes rewrite it completely.
//!
//! ## Features
//!
//! - Append-only create, id recomputed from the file each time
//! - Full rewrite via a temp file and rename, so a crash mid-write leaves the
//!   previous file intact
//! - One lock per repository guarding every read-modify-write cycle

use async_trait::async_trait;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::connection::CsvConnection;
use super::todo_record;
use crate::domain::models::todo::Todo;
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::traits::TodoStorage;

/// CSV-based todo repository
pub struct CsvTodoRepository {
    connection: CsvConnection,
    lock: Mutex<()>,
}

impl CsvTodoRepository {
    /// Create a new CSV todo repository
    pub fn new(connection: CsvConnection) -> Self {
        Self {
            connection,
            lock: Mutex::new(()),
        }
    }

    /// Read all todos from the data file
    fn read_todos(&self) -> StorageResult<Vec<Todo>> {
        let file = File::open(self.connection.data_file_path())?;
        let todos = todo_record::read_todos(file)?;
        debug!(
            "Read {} todos from {}",
            todos.len(),
            self.connection.data_file_path().display()
        );
        Ok(todos)
    }

    /// Append one todo row to the data file
    fn append_todo(&self, todo: &Todo) -> StorageResult<()> {
        let mut file = OpenOptions::new()
            .read(true)
            .create(true)
            .append(true)
            .open(self.connection.data_file_path())?;

        // A last row without its terminator would be glued to the new one
        if file.metadata()?.len() > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1))?;
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                warn!(
                    "{} does not end with a newline, terminating its last row",
                    self.connection.data_file_path().display()
                );
                file.write_all(b"\n")?;
            }
        }

        let mut csv_writer = todo_record::writer(file);
        todo_record::write_todo(&mut csv_writer, todo)?;
        csv_writer.flush()?;

        debug!("Appended todo {} to {}", todo.id, self.connection.data_file_path().display());
        Ok(())
    }

    /// Replace the data file with exactly `todos`, ids written as they are
    fn write_todos(&self, todos: &[Todo]) -> StorageResult<()> {
        let temp_file_path = self.connection.temp_file_path();

        if let Err(e) = Self::write_temp_file(&temp_file_path, todos) {
            if let Err(cleanup) = fs::remove_file(&temp_file_path) {
                debug!("Could not remove {}: {}", temp_file_path.display(), cleanup);
            }
            return Err(e);
        }

        fs::rename(&temp_file_path, self.connection.data_file_path())?;

        debug!(
            "Rewrote {} todos to {}",
            todos.len(),
            self.connection.data_file_path().display()
        );
        Ok(())
    }

    fn write_temp_file(path: &std::path::Path, todos: &[Todo]) -> StorageResult<()> {
        let temp_file = File::create(path)?;
        let mut csv_writer = todo_record::writer(temp_file);

        for todo in todos {
            todo_record::write_todo(&mut csv_writer, todo)?;
        }

        // Surfaces the flush error instead of losing it on drop
        let temp_file = csv_writer
            .into_inner()
            .map_err(|e| StorageError::Io(e.into_error()))?;
        temp_file.sync_all()?;
        Ok(())
    }
}

#[async_trait]
impl TodoStorage for CsvTodoRepository {
    async fn initialize(&self) -> StorageResult<()> {
        let _guard = self.lock.lock().await;
        self.connection.ensure_data_file_exists()?;
        info!(
            "Initialized CSV todo storage at {}",
            self.connection.data_file_path().display()
        );
        Ok(())
    }

    async fn list_todos(&self) -> StorageResult<Vec<Todo>> {
        let _guard = self.lock.lock().await;
        self.read_todos()
    }

    async fn get_todo(&self, id: &str) -> StorageResult<Todo> {
        let _guard = self.lock.lock().await;
        self.read_todos()?
            .into_iter()
            .find(|todo| todo.id == id)
            .ok_or_else(|| StorageError::not_found(id))
    }

    async fn create_todo(&self, mut todo: Todo) -> StorageResult<Todo> {
        let _guard = self.lock.lock().await;

        let existing = if self.connection.data_file_exists() {
            self.read_todos()?
        } else {
            Vec::new()
        };

        todo.id = Todo::next_id(&existing).ok_or(StorageError::IdsExhausted)?;
        self.append_todo(&todo)?;

        info!("Stored todo {} in CSV", todo.id);
        Ok(todo)
    }

    async fn update_todo(&self, id: &str, mut todo: Todo) -> StorageResult<Todo> {
        let _guard = self.lock.lock().await;

        let mut todos = self.read_todos()?;
        let slot = match todos.iter_mut().find(|current| current.id == id) {
            Some(slot) => slot,
            None => {
                warn!("Cannot update todo {}: not found", id);
                return Err(StorageError::not_found(id));
            }
        };

        todo.id = id.to_string();
        *slot = todo.clone();
        self.write_todos(&todos)?;

        info!("Updated todo {} in CSV", id);
        Ok(todo)
    }

    async fn delete_todo(&self, id: &str) -> StorageResult<Todo> {
        let _guard = self.lock.lock().await;

        let mut todos = self.read_todos()?;
        let index = match todos.iter().position(|todo| todo.id == id) {
            Some(index) => index,
            None => {
                warn!("Cannot delete todo {}: not found", id);
                return Err(StorageError::not_found(id));
            }
        };

        let removed = todos.remove(index);
        self.write_todos(&todos)?;

        info!("Deleted todo {} from CSV", id);
        Ok(removed)
    }
}
