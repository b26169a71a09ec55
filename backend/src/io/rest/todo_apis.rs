//! # REST API for Todos
//!
//! Endpoints for listing, creating, reading, updating and deleting todos.
//! Not-found and storage failures only ever expose a generic title; the
//! underlying error is logged.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::{DataResponse, ErrorResponse, TodoRequest};
use tracing::{error, info, warn};

use super::mappers::TodoMapper;
use crate::domain::TodoServiceError;
use crate::AppState;

pub const API_VERSION: &str = "v1";

/// Title sent for every error whose details must stay server-side
pub const GENERAL_ERROR_MESSAGE: &str = "an error has occurred";

fn error_response(status: StatusCode, title: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(status.as_u16(), title))).into_response()
}

fn service_error_response(context: &str, err: TodoServiceError) -> Response {
    match err {
        TodoServiceError::Validation(e) => {
            warn!("{}: {}", context, e);
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        e if e.is_not_found() => {
            warn!("{}: {}", context, e);
            error_response(StatusCode::NOT_FOUND, GENERAL_ERROR_MESSAGE)
        }
        e => {
            error!("{}: {:?}", context, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERAL_ERROR_MESSAGE)
        }
    }
}

fn rejection_response(rejection: JsonRejection) -> Response {
    warn!("Rejected request body: {}", rejection.body_text());
    error_response(StatusCode::BAD_REQUEST, rejection.body_text())
}

/// GET /api/v1
pub async fn index() -> impl IntoResponse {
    (
        StatusCode::OK,
        format!("Welcome to the Todo REST API {}!\n", API_VERSION),
    )
}

/// GET /api/v1/todos
pub async fn list_todos(State(state): State<AppState>) -> Response {
    info!("GET /api/v1/todos");

    match state.todo_service.list_todos().await {
        Ok(todos) => (
            StatusCode::OK,
            Json(DataResponse::new(TodoMapper::to_dto_list(todos))),
        )
            .into_response(),
        Err(e) => service_error_response("Error listing todos", e),
    }
}

/// GET /api/v1/todos/:id
pub async fn get_todo(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    info!("GET /api/v1/todos/{}", id);

    match state.todo_service.get_todo(&id).await {
        Ok(todo) => (StatusCode::OK, Json(DataResponse::new(TodoMapper::to_dto(todo)))).into_response(),
        Err(e) => service_error_response("Error retrieving todo", e),
    }
}

/// POST /api/v1/todos
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => return rejection_response(rejection),
    };
    info!("POST /api/v1/todos - request: {:?}", request);

    let command = TodoMapper::to_create_command(request);
    match state.todo_service.create_todo(command).await {
        Ok(todo) => (
            StatusCode::CREATED,
            Json(DataResponse::new(TodoMapper::to_dto(todo))),
        )
            .into_response(),
        Err(e) => service_error_response("Error creating todo", e),
    }
}

/// PUT /api/v1/todos/:id
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => return rejection_response(rejection),
    };
    info!("PUT /api/v1/todos/{} - request: {:?}", id, request);

    let command = TodoMapper::to_update_command(id, request);
    match state.todo_service.update_todo(command).await {
        Ok(todo) => (StatusCode::OK, Json(DataResponse::new(TodoMapper::to_dto(todo)))).into_response(),
        Err(e) => service_error_response("Error updating todo", e),
    }
}

/// DELETE /api/v1/todos/:id
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    info!("DELETE /api/v1/todos/{}", id);

    match state.todo_service.delete_todo(&id).await {
        Ok(todo) => (StatusCode::OK, Json(DataResponse::new(TodoMapper::to_dto(todo)))).into_response(),
        Err(e) => service_error_response("Error deleting todo", e),
    }
}
