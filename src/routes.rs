// Route path constants - single source of truth for all served paths

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub const HELLO: &str = "/hello";
pub const ERROR: &str = "/error";
pub const INDEX: &str = "/";
pub const MARKUP: &str = "/kotlinxhtml";
pub const DB: &str = "/db";
pub const STYLES: &str = "/styles.css";
pub const JSON: &str = "/json/jackson";
pub const STATIC_LOGO: &str = "/static/lang-logo.png";
pub const STYLESHEETS: &str = "/stylesheets";

/// Assemble the fixed route table.
///
/// The table is immutable once built. Registering the same (method, path)
/// pair twice panics here, before the server accepts its first connection.
pub fn router(state: AppState) -> Router {
    let static_root = state.config.static_root.clone();

    Router::new()
        .route(HELLO, get(handlers::hello_handler))
        .route(ERROR, get(handlers::error_handler))
        .route(INDEX, get(handlers::index_handler))
        .route(MARKUP, get(handlers::markup_handler))
        .route(DB, get(handlers::db_handler))
        .route(STYLES, get(handlers::styles_handler))
        .route(JSON, get(handlers::json_handler))
        .route_service(
            STATIC_LOGO,
            ServeFile::new(static_root.join("lang-logo.png")),
        )
        .nest_service(STYLESHEETS, ServeDir::new(static_root.join("stylesheets")))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
