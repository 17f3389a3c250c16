//! HTTP API with greeting endpoints and an in-memory to-do list.
//!
//! # Design
//! Handlers are thin adapters: axum's extractors coerce the request shape,
//! and to-do handlers delegate to a [`TodoStore`] shared behind one
//! `RwLock`, so id assignment and list mutation never interleave. State
//! lives only as long as the process.

pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{any, get, post},
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::{ApiError, StoreError, TodoOp};
pub use handlers::todos::DeleteResponse;
pub use store::{TodoItem, TodoPatch, TodoStore};

pub type SharedStore = Arc<RwLock<TodoStore>>;

/// Router with default configuration and an empty store.
pub fn app() -> Router {
    app_with_config(&ServerConfig::default())
}

pub fn app_with_config(config: &ServerConfig) -> Router {
    let store: SharedStore = Arc::new(RwLock::new(TodoStore::new()));
    Router::new()
        .route("/", get(handlers::greeting::root))
        .route("/hello/{name}", get(handlers::greeting::greet))
        .route("/bye/{name}", get(handlers::greeting::farewell))
        .route("/items/", get(handlers::greeting::read_items))
        .route("/notes/", post(handlers::feedback::create_note))
        .route("/reviews/", post(handlers::feedback::create_review))
        .route(
            "/todos/",
            get(handlers::todos::list_todos).post(handlers::todos::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::todos::get_todo)
                .put(handlers::todos::update_todo)
                .delete(handlers::todos::delete_todo),
        )
        .route("/items", any(handlers::append_slash))
        .route("/notes", any(handlers::append_slash))
        .route("/reviews", any(handlers::append_slash))
        .route("/todos", any(handlers::append_slash))
        .with_state(store)
        .layer(cors::cors_layer(&config.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// Serve on `listener` until the process receives ctrl-c.
pub async fn run(listener: TcpListener, config: ServerConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_config(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
