use axum::http::header;
use axum::response::IntoResponse;

use crate::css::Stylesheet;

/// GET /styles.css handler - stylesheet assembled in code
pub async fn styles_handler() -> impl IntoResponse {
    let sheet = Stylesheet::new()
        .rule("body", &[("background-color", "red")])
        .rule("p", &[("font-size", "2em")])
        .rule("p.myclass", &[("color", "blue")]);

    ([(header::CONTENT_TYPE, "text/css")], sheet.render())
}
