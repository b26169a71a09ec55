use shared::{TodoDto, TodoRequest};
use tracing::debug;

use crate::domain::commands::{CreateTodoCommand, UpdateTodoCommand};
use crate::domain::models::todo::Todo;

/// Mapper to convert between shared todo DTOs and domain types.
pub struct TodoMapper;

impl TodoMapper {
    pub fn to_dto(domain: Todo) -> TodoDto {
        TodoDto {
            id: domain.id,
            title: domain.title,
            description: domain.description,
            completed: domain.completed,
        }
    }

    pub fn to_dto_list(domain_todos: Vec<Todo>) -> Vec<TodoDto> {
        domain_todos.into_iter().map(Self::to_dto).collect()
    }

    /// Client-supplied ids are dropped; the backend assigns one.
    pub fn to_create_command(request: TodoRequest) -> CreateTodoCommand {
        if let Some(id) = &request.id {
            debug!("Ignoring client-supplied id '{}' on create", id);
        }
        CreateTodoCommand {
            title: request.title,
            description: request.description,
            completed: request.completed,
        }
    }

    /// The path id wins over any id in the body.
    pub fn to_update_command(id: String, request: TodoRequest) -> UpdateTodoCommand {
        UpdateTodoCommand {
            id,
            title: request.title,
            description: request.description,
            completed: request.completed,
        }
    }
}
