//! HTTP front end for the in-memory todo list.
//!
//! # Overview
//! `app` builds the axum `Router`; `run` serves it on a listener until the
//! shutdown future resolves. The binary in `main.rs` adds configuration and
//! logging on top.
//!
//! # Design
//! - All state lives in one `Store`, passed to handlers as axum state.
//! - Every client error goes through `ApiError`, including extractor
//!   rejections, so status codes and bodies are decided in one place.
//! - Panics in handlers are caught and answered with a 500 `ApiError`.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

use std::any::Any;
use std::future::Future;

use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::{ApiError, FieldError};
pub use state::Store;

pub fn app(store: Store) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{todo_id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run<F>(listener: TcpListener, store: Store, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let reason = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(%reason, "handler panicked");
    ApiError::Internal.into_response()
}
