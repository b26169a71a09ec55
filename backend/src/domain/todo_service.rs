use std::sync::Arc;
use tracing::{info, warn};

use super::commands::{CreateTodoCommand, UpdateTodoCommand};
use super::models::todo::{Todo, TodoValidationError};
use crate::storage::{StorageError, TodoStorage};

#[derive(Debug, thiserror::Error)]
pub enum TodoServiceError {
    #[error(transparent)]
    Validation(#[from] TodoValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TodoServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoServiceError::Storage(e) if e.is_not_found())
    }
}

pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Service for managing todos on top of whichever storage backend is configured
#[derive(Clone)]
pub struct TodoService {
    storage: Arc<dyn TodoStorage>,
}

impl TodoService {
    pub fn new(storage: Arc<dyn TodoStorage>) -> Self {
        Self { storage }
    }

    /// Prepare the underlying storage; called once at startup
    pub async fn initialize(&self) -> TodoServiceResult<()> {
        self.storage.initialize().await?;
        Ok(())
    }

    /// All todos, ascending by numeric id
    pub async fn list_todos(&self) -> TodoServiceResult<Vec<Todo>> {
        let mut todos = self.storage.list_todos().await?;
        sort_todos_by_id(&mut todos);
        info!("Found {} todos", todos.len());
        Ok(todos)
    }

    pub async fn get_todo(&self, id: &str) -> TodoServiceResult<Todo> {
        let todo = self.storage.get_todo(id).await?;
        Ok(todo)
    }

    pub async fn create_todo(&self, command: CreateTodoCommand) -> TodoServiceResult<Todo> {
        info!("Creating todo: title={}", command.title);
        validate(&command.title, &command.description)?;

        let todo = Todo::new(command.title, command.description, command.completed);
        let created = self.storage.create_todo(todo).await?;

        info!("Created todo with ID: {}", created.id);
        Ok(created)
    }

    pub async fn update_todo(&self, command: UpdateTodoCommand) -> TodoServiceResult<Todo> {
        info!("Updating todo: {}", command.id);
        validate(&command.title, &command.description)?;

        let todo = Todo::new(command.title, command.description, command.completed);
        let updated = self.storage.update_todo(&command.id, todo).await?;
        Ok(updated)
    }

    pub async fn delete_todo(&self, id: &str) -> TodoServiceResult<Todo> {
        info!("Deleting todo: {}", id);
        let removed = self.storage.delete_todo(id).await?;
        Ok(removed)
    }
}

fn validate(title: &str, description: &str) -> Result<(), TodoValidationError> {
    if title.is_empty() {
        warn!("Rejected todo without title");
        return Err(TodoValidationError::EmptyTitle);
    }
    if description.is_empty() {
        warn!("Rejected todo without description");
        return Err(TodoValidationError::EmptyDescription);
    }
    Ok(())
}

/// Order todos by the numeric value of their id; non-numeric ids go last
pub fn sort_todos_by_id(todos: &mut [Todo]) {
    todos.sort_by(|a, b| match (a.numeric_id(), b.numeric_id()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryTodoRepository;

    async fn setup_service() -> TodoService {
        let service = TodoService::new(Arc::new(MemoryTodoRepository::new()));
        service.initialize().await.expect("Failed to initialize");
        service
    }

    fn create_command(title: &str, description: &str) -> CreateTodoCommand {
        CreateTodoCommand {
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_empty_fields() {
        let service = setup_service().await;

        let err = service.create_todo(create_command("", "d1")).await.unwrap_err();
        assert!(matches!(
            err,
            TodoServiceError::Validation(TodoValidationError::EmptyTitle)
        ));

        let err = service.create_todo(create_command("A", "")).await.unwrap_err();
        assert!(matches!(
            err,
            TodoServiceError::Validation(TodoValidationError::EmptyDescription)
        ));

        assert!(service.list_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_accepts_whitespace_fields() {
        let service = setup_service().await;

        let created = service
            .create_todo(create_command(" ", "\t"))
            .await
            .expect("Whitespace is not empty");

        assert_eq!(created.title, " ");
        assert_eq!(created.description, "\t");
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let service = setup_service().await;

        let err = service
            .update_todo(UpdateTodoCommand {
                id: "1".to_string(),
                title: String::new(),
                description: "d".to_string(),
                completed: false,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, TodoServiceError::Validation(_)));
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let service = setup_service().await;

        let err = service
            .update_todo(UpdateTodoCommand {
                id: "5".to_string(),
                title: "A".to_string(),
                description: "d".to_string(),
                completed: true,
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_is_sorted_numerically() {
        let service = setup_service().await;
        for n in 1..=11 {
            service
                .create_todo(create_command(&format!("todo {}", n), "d"))
                .await
                .unwrap();
        }

        let ids: Vec<String> = service
            .list_todos()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        let expected: Vec<String> = (1..=11).map(|n| n.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_sort_puts_non_numeric_ids_last() {
        let mut todos: Vec<Todo> = ["10", "x", "2", "1"]
            .iter()
            .map(|id| Todo {
                id: id.to_string(),
                ..Todo::default()
            })
            .collect();

        sort_todos_by_id(&mut todos);

        let ids: Vec<&str> = todos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "10", "x"]);
    }
}
