use std::sync::Arc;

use todo_store_api::{config::Config, route::create_router, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Entry point of the application
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_store_api=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // The store starts empty and lives only as long as this process
    let app_state = Arc::new(AppState::new());
    let app = create_router(app_state);

    let server = axum::Server::try_bind(&config.addr)?;
    info!(addr = %config.addr, "API server is running");
    info!("  GET    /todos/getAllTodos");
    info!("  POST   /todos/getUserTodos");
    info!("  POST   /todos/getTodoById");
    info!("  POST   /todos/setTodo");
    info!("  PUT    /todos/updateTodo");
    info!("  DELETE /todos/deleteTodoItem");
    info!("  DELETE /todos/deleteUserTodos");
    info!("  DELETE /todos/deleteAllTodos");

    server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
