pub mod db;
pub mod fail;
pub mod hello;
pub mod index;
pub mod json;
pub mod markup;
pub mod styles;

pub use db::db_handler;
pub use fail::error_handler;
pub use hello::hello_handler;
pub use index::index_handler;
pub use json::json_handler;
pub use markup::markup_handler;
pub use styles::styles_handler;

use axum::http::StatusCode;

/// Fallback for requests outside the route table
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
