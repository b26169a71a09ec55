//! # In-Memory Todo Repository
//!
//! Keeps todos in a process-local vector. Contents are lost on restart.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::error::{StorageError, StorageResult};
use super::traits::TodoStorage;
use crate::domain::models::todo::Todo;

/// In-memory todo repository
#[derive(Default)]
pub struct MemoryTodoRepository {
    todos: Mutex<Vec<Todo>>,
}

impl MemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStorage for MemoryTodoRepository {
    async fn initialize(&self) -> StorageResult<()> {
        let mut todos = self.todos.lock().await;
        todos.clear();
        info!("Initialized in-memory todo storage");
        Ok(())
    }

    async fn list_todos(&self) -> StorageResult<Vec<Todo>> {
        let todos = self.todos.lock().await;
        Ok(todos.clone())
    }

    async fn get_todo(&self, id: &str) -> StorageResult<Todo> {
        let todos = self.todos.lock().await;
        todos
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
            .ok_or_else(|| StorageError::not_found(id))
    }

    async fn create_todo(&self, mut todo: Todo) -> StorageResult<Todo> {
        let mut todos = self.todos.lock().await;
        todo.id = Todo::next_id(&todos).ok_or(StorageError::IdsExhausted)?;
        todos.push(todo.clone());
        debug!("Stored todo {} in memory", todo.id);
        Ok(todo)
    }

    async fn update_todo(&self, id: &str, mut todo: Todo) -> StorageResult<Todo> {
        let mut todos = self.todos.lock().await;
        let slot = todos
            .iter_mut()
            .find(|current| current.id == id)
            .ok_or_else(|| StorageError::not_found(id))?;

        todo.id = id.to_string();
        *slot = todo.clone();
        debug!("Updated todo {} in memory", id);
        Ok(todo)
    }

    async fn delete_todo(&self, id: &str) -> StorageResult<Todo> {
        let mut todos = self.todos.lock().await;
        let index = todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(|| StorageError::not_found(id))?;

        let removed = todos.remove(index);
        debug!("Deleted todo {} from memory", id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_repo() -> MemoryTodoRepository {
        let repo = MemoryTodoRepository::new();
        repo.initialize().await.expect("Failed to initialize");
        repo
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = setup_repo().await;

        for expected in 1..=5 {
            let created = repo
                .create_todo(Todo::new(format!("title {}", expected), "desc", false))
                .await
                .expect("Failed to create todo");
            assert_eq!(created.id, expected.to_string());
        }
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let repo = setup_repo().await;

        let mut todo = Todo::new("A", "d1", false);
        todo.id = "42".to_string();
        let created = repo.create_todo(todo).await.expect("Failed to create todo");

        assert_eq!(created.id, "1");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let repo = setup_repo().await;
        repo.create_todo(Todo::new("A", "d1", false)).await.unwrap();

        let err = repo.get_todo("3").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_preserves_id() {
        let repo = setup_repo().await;
        repo.create_todo(Todo::new("A", "d1", false)).await.unwrap();
        repo.create_todo(Todo::new("B", "d2", false)).await.unwrap();

        let mut payload = Todo::new("A2", "d1", true);
        payload.id = "99".to_string();
        let updated = repo.update_todo("1", payload).await.expect("Failed to update");

        assert_eq!(updated, Todo { id: "1".to_string(), ..Todo::new("A2", "d1", true) });
        assert_eq!(repo.get_todo("1").await.unwrap(), updated);
        assert_eq!(repo.get_todo("2").await.unwrap().title, "B");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = setup_repo().await;

        let err = repo
            .update_todo("7", Todo::new("A", "d1", false))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_the_todo() {
        let repo = setup_repo().await;
        repo.create_todo(Todo::new("A", "d1", false)).await.unwrap();
        repo.create_todo(Todo::new("B", "d2", false)).await.unwrap();

        let removed = repo.delete_todo("1").await.expect("Failed to delete");
        assert_eq!(removed.title, "A");

        let remaining = repo.list_todos().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "2");
        assert!(repo.get_todo("1").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let repo = setup_repo().await;

        let err = repo.delete_todo("1").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = setup_repo().await;
        for title in ["A", "B", "C"] {
            repo.create_todo(Todo::new(title, "d", false)).await.unwrap();
        }
        repo.delete_todo("2").await.unwrap();

        let created = repo.create_todo(Todo::new("D", "d", false)).await.unwrap();
        assert_eq!(created.id, "4");
    }

    #[tokio::test]
    async fn test_list_returns_a_copy() {
        let repo = setup_repo().await;
        repo.create_todo(Todo::new("A", "d1", false)).await.unwrap();

        let mut snapshot = repo.list_todos().await.unwrap();
        snapshot[0].title = "changed".to_string();
        snapshot.clear();

        let current = repo.list_todos().await.unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].title, "A");
    }

    #[tokio::test]
    async fn test_initialize_resets_contents() {
        let repo = setup_repo().await;
        repo.create_todo(Todo::new("A", "d1", false)).await.unwrap();

        repo.initialize().await.unwrap();

        assert!(repo.list_todos().await.unwrap().is_empty());
        let created = repo.create_todo(Todo::new("B", "d2", false)).await.unwrap();
        assert_eq!(created.id, "1");
    }
}
