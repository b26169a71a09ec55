//! # Todo Backend
//!
//! A small REST API over todo records.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (TodoService, validation, ordering)
//!     ↓
//! Storage Layer (TodoStorage: in-memory or CSV file)
//! ```
//!
//! The storage backend is selected once from [`config::AppConfig`] and
//! injected into [`AppState`]; nothing else knows which backend is active.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::Method,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::TodoService;
use crate::storage::{create_todo_storage, TodoStorage};
use std::sync::Arc;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub todo_service: TodoService,
}

impl AppState {
    pub fn new(todo_service: TodoService) -> Self {
        Self { todo_service }
    }
}

/// Select and initialize the configured storage backend
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up storage");
    let storage = create_todo_storage(config);
    initialize_with_storage(storage).await
}

/// Build the application state around an already constructed backend
pub async fn initialize_with_storage(storage: Arc<dyn TodoStorage>) -> Result<AppState> {
    let todo_service = TodoService::new(storage);
    todo_service.initialize().await?;

    info!("Setting up application state");
    Ok(AppState::new(todo_service))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/", get(io::index))
        .route("/todos", get(io::list_todos).post(io::create_todo))
        .route(
            "/todos/:id",
            get(io::get_todo).put(io::update_todo).delete(io::delete_todo),
        );

    Router::new()
        .nest(&format!("/api/{}", io::API_VERSION), api_routes)
        .layer(cors)
        .with_state(app_state)
}
