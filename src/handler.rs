use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::{
    error::TodoError,
    schema::{CreateTodoSchema, TodoRefSchema, UpdateTodoSchema, UserSchema},
    service::TodoService,
    AppState,
};

// Handler for the health checker route
pub async fn health_checker_handler() -> impl IntoResponse {
    const MESSAGE: &str = "In-memory todo store API with Rust and Axum";

    let json_response = json!({
        "status": "success",
        "message": MESSAGE
    });

    Json(json_response)
}

// Handler for listing every user with their todos
pub async fn get_all_todos(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, TodoError> {
    let store = data.store();
    let users = TodoService::list_all(&store)?;

    Ok(Json(json!({
        "status": "success",
        "result": users
    })))
}

// Handler for listing the todos of one user
pub async fn get_user_todos(
    State(data): State<Arc<AppState>>,
    payload: Result<Json<UserSchema>, JsonRejection>,
) -> Result<Json<Value>, TodoError> {
    let Json(body) = payload?;
    let store = data.store();

    let listing = TodoService::user_todos(&store, body.user_name(), body.user_email());
    match listing {
        Ok(user) => Ok(Json(json!({
            "result": {
                "userName": user.user_name,
                "userEmail": user.user_email,
                "todos": user.todos()
            }
        }))),
        // An empty listing or unknown email is a failed listing, not a 404
        Err(err @ (TodoError::NoUserTodos(_) | TodoError::EmailNotFound(_))) => {
            debug!(error = %err, "user listing failed");
            Ok(Json(json!({
                "result": {
                    "status": "failure",
                    "desc": listing_failure_desc(&err)
                }
            })))
        }
        Err(err) => Err(err),
    }
}

fn listing_failure_desc(err: &TodoError) -> String {
    match err {
        TodoError::NoUserTodos(user_name) => format!("no todo items for user name: '{user_name}'"),
        TodoError::EmailNotFound(user_email) => {
            format!("There is no user with email: '{user_email}'")
        }
        other => other.to_string(),
    }
}

// Handler for getting a specific Todo by ID
pub async fn get_todo_by_id(
    State(data): State<Arc<AppState>>,
    payload: Result<Json<TodoRefSchema>, JsonRejection>,
) -> Result<impl IntoResponse, TodoError> {
    let Json(body) = payload?;
    let store = data.store();
    let todo = TodoService::get_todo(
        &store,
        body.user.user_name(),
        body.user.user_email(),
        body.todo_id(),
    )?;

    Ok(Json(json!({ "result": todo })))
}

// Handler for creating a new Todo
pub async fn set_todo(
    State(data): State<Arc<AppState>>,
    payload: Result<Json<CreateTodoSchema>, JsonRejection>,
) -> Result<impl IntoResponse, TodoError> {
    let Json(body) = payload?;
    let input = body.validate()?;

    let mut store = data.store();
    let todo = TodoService::create_todo(&mut store, input)?;

    Ok((StatusCode::CREATED, Json(json!({ "result": todo }))))
}

// Handler for updating a Todo
pub async fn update_todo(
    State(data): State<Arc<AppState>>,
    payload: Result<Json<UpdateTodoSchema>, JsonRejection>,
) -> Result<impl IntoResponse, TodoError> {
    let Json(body) = payload?;
    let UpdateTodoSchema { todo, updated_todo } = body;

    let mut store = data.store();
    let updated_item = TodoService::update_todo(
        &mut store,
        todo.user.user_name(),
        todo.user.user_email(),
        todo.todo_id(),
        updated_todo.into(),
    )?;

    Ok(Json(json!({
        "status": "success",
        "result": { "updatedItem": updated_item }
    })))
}

// Handler for deleting one Todo
pub async fn delete_todo_item(
    State(data): State<Arc<AppState>>,
    payload: Result<Json<TodoRefSchema>, JsonRejection>,
) -> Result<impl IntoResponse, TodoError> {
    let Json(body) = payload?;
    let mut store = data.store();
    let deleted = TodoService::delete_todo(
        &mut store,
        body.user.user_name(),
        body.user.user_email(),
        body.todo_id(),
    )?;

    Ok(Json(json!({
        "status": "success",
        "message": "The following todo item have been deleted",
        "userName": body.user.user_name(),
        "email": body.user.user_email(),
        "deletedTodo": [deleted]
    })))
}

// Handler for deleting all Todos of one user
pub async fn delete_user_todos(
    State(data): State<Arc<AppState>>,
    payload: Result<Json<UserSchema>, JsonRejection>,
) -> Result<impl IntoResponse, TodoError> {
    let Json(body) = payload?;
    let mut store = data.store();
    let deleted = TodoService::delete_user_todos(&mut store, body.user_name(), body.user_email())?;

    Ok(Json(json!({
        "status": "success",
        "message": "The following todo items have been deleted",
        "deletedTodos": deleted
    })))
}

// Handler for deleting the Todos of every user
pub async fn delete_all_todos(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, TodoError> {
    let mut store = data.store();
    TodoService::delete_all(&mut store)?;

    Ok(Json(json!({
        "status": "success",
        "message": "All todo items deleted"
    })))
}
