use std::sync::Arc;

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handler::*, AppState};

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Configure CORS settings for the application
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_static(ALLOWED_ORIGIN))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([ACCEPT, CONTENT_TYPE]);

    Router::new()
        .route("/", get(health_checker_handler))
        .route("/todos/getAllTodos", get(get_all_todos))
        .route("/todos/getUserTodos", post(get_user_todos))
        .route("/todos/getTodoById", post(get_todo_by_id))
        .route("/todos/setTodo", post(set_todo))
        .route("/todos/updateTodo", put(update_todo))
        .route("/todos/deleteTodoItem", delete(delete_todo_item))
        .route("/todos/deleteUserTodos", delete(delete_user_todos))
        .route("/todos/deleteAllTodos", delete(delete_all_todos))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
