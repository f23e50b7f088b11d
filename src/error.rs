use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::templates;

/// Custom error type for route handlers
///
/// Every failure a handler propagates ends up here and is translated into
/// the rendered error page.
#[derive(Debug)]
pub enum AppError {
    /// A handler reached a state it refuses to continue from
    InvalidState(String),
    /// Database operation error
    Database(sqlx::Error),
    /// Template rendering error
    Template(minijinja::Error),
}

impl AppError {
    fn message(&self) -> String {
        match self {
            AppError::InvalidState(msg) => msg.clone(),
            AppError::Database(err) => format!("Database error: {err}"),
            AppError::Template(err) => format!("Template error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.message();
        tracing::error!("request failed: {}", message);

        let body = templates::render_error_page(&message);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::Template(err)
    }
}
