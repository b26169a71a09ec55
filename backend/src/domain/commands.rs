//! Domain-level command types.
//! The REST layer maps the public DTOs of the `shared` crate to these.

/// Input for creating a new todo. Any id the client sent is already dropped.
#[derive(Debug, Clone)]
pub struct CreateTodoCommand {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Input for replacing every field of an existing todo except its id.
#[derive(Debug, Clone)]
pub struct UpdateTodoCommand {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}
