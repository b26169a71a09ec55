use serde::{Deserialize, Serialize};

/// Todo item as exchanged with API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoDto {
    /// Decimal id assigned by the backend ("1", "2", ...)
    pub id: String,
    pub title: String,
    pub description: String,
    /// Completion flag, `false` when omitted by the client
    #[serde(default)]
    pub completed: bool,
}

/// Request body for POST /api/v1/todos and PUT /api/v1/todos/:id
///
/// A client-supplied `id` is accepted and ignored; the backend owns id assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Older clients send this flag as `terminated`
    #[serde(default, alias = "terminated")]
    pub completed: bool,
}

/// Success envelope: `{"data": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Error details carried inside [`ErrorResponse`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status code repeated in the body
    pub status: u16,
    /// Human readable title, generic unless the error is client-actionable
    pub title: String,
}

/// Error envelope: `{"error": {"status": 404, "title": "..."}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error: ApiError {
                status,
                title: title.into(),
            },
        }
    }
}
