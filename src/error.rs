//! Error taxonomy of the todo endpoints and its HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::model::TodoStatus;

/// Errors surfaced to the caller of a todo endpoint.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("Request must contain all of: [userName, userEmail, todoName, deadline]")]
    MissingFields,

    #[error("This email already taken")]
    EmailTaken,

    #[error("Invalid status value '{0}', must be one of [{}]", TodoStatus::LABELS.join(", "))]
    InvalidStatus(String),

    /// The body could not be read as the expected JSON document.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("User email '{0}' not found")]
    EmailNotFound(String),

    #[error("Todo item with id '{0}' not found")]
    TodoNotFound(String),

    #[error("No todo items for '{0}'")]
    NoUserTodos(String),

    #[error("There are no todo items exist")]
    NoTodos,

    #[error("There are no users on this service")]
    NoUsers,
}

impl TodoError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TodoError::MissingFields
            | TodoError::EmailTaken
            | TodoError::InvalidStatus(_)
            | TodoError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            TodoError::UserNotFound(_)
            | TodoError::EmailNotFound(_)
            | TodoError::TodoNotFound(_)
            | TodoError::NoUserTodos(_)
            | TodoError::NoTodos => StatusCode::NOT_FOUND,
            // Empty store is reported as a failed-but-successful listing
            TodoError::NoUsers => StatusCode::OK,
        }
    }
}

impl From<JsonRejection> for TodoError {
    fn from(rejection: JsonRejection) -> Self {
        TodoError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(status = status.as_u16(), error = %self, "request rejected");

        let body = match &self {
            TodoError::NoTodos => json!({
                "status": "failure",
                "message": self.to_string(),
            }),
            TodoError::NoUsers => json!({
                "status": "failure",
                "result": { "desc": self.to_string() },
            }),
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
