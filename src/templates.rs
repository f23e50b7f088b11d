//! Page rendering: the template environment plus the weak validation tags
//! attached to rendered pages.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use minijinja::Environment;

use crate::error::AppError;

/// Template environment, built once per process.
///
/// Templates are compiled into the binary with `include_str!`.
fn environment() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.add_template("index", include_str!("../templates/index.jinja"))
            .expect("index template is valid");
        env.add_template("db", include_str!("../templates/db.jinja"))
            .expect("db template is valid");
        env.add_template("error", include_str!("../templates/error.jinja"))
            .expect("error template is valid");
        env
    })
}

/// Generate a weak validation tag from the model's serialized form.
///
/// Deterministic: the same model always hashes to the same tag.
pub fn etag(model: &serde_json::Value) -> String {
    let mut hasher = DefaultHasher::new();
    model.to_string().hash(&mut hasher);
    let v = hasher.finish();
    format!("W/\"{v:x}\"")
}

/// Check if the client's `If-None-Match` header matches the server's tag
fn etag_matches(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|client| {
            client
                .split(',')
                .any(|candidate| candidate.trim() == etag || candidate.trim() == "*")
        })
}

/// Render a template against the given model and attach the model's tag.
///
/// Answers `304 Not Modified` when the client already holds a matching tag.
pub fn render_page(
    name: &str,
    model: &serde_json::Value,
    headers: &HeaderMap,
) -> Result<Response, AppError> {
    let tag = etag(model);

    if etag_matches(headers, &tag) {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, tag)]).into_response());
    }

    let template = environment().get_template(name)?;
    let body = template.render(minijinja::Value::from_serialize(model))?;

    Ok(([(header::ETAG, tag)], Html(body)).into_response())
}

/// Render the error page body.
///
/// Falls back to plain text if the error template itself cannot render, so
/// the failure path cannot recurse.
pub fn render_error_page(message: &str) -> String {
    let model = minijinja::context! { message => message };
    environment()
        .get_template("error")
        .and_then(|template| template.render(model))
        .unwrap_or_else(|_| format!("Internal server error: {message}"))
}
