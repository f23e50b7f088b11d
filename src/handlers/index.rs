use axum::http::HeaderMap;
use axum::response::Response;
use serde_json::json;

use crate::error::AppError;
use crate::templates;

/// GET / handler - template-rendered landing page with a weak ETag
pub async fn index_handler(headers: HeaderMap) -> Result<Response, AppError> {
    let model = json!({ "message": "Hello World!" });
    templates::render_page("index", &model, &headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::{Router, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route(routes::INDEX, get(index_handler))
    }

    #[tokio::test]
    async fn test_index_contains_message() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(routes::INDEX)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Hello World!"));
    }

    #[tokio::test]
    async fn test_index_etag_is_stable_across_calls() {
        let first = app()
            .oneshot(
                Request::builder()
                    .uri(routes::INDEX)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let second = app()
            .oneshot(
                Request::builder()
                    .uri(routes::INDEX)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let first_tag = first.headers()[header::ETAG].clone();
        let second_tag = second.headers()[header::ETAG].clone();
        assert_eq!(first_tag, second_tag);
    }

    #[tokio::test]
    async fn test_index_honors_if_none_match() {
        let first = app()
            .oneshot(
                Request::builder()
                    .uri(routes::INDEX)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let tag = first.headers()[header::ETAG].clone();

        let second = app()
            .oneshot(
                Request::builder()
                    .uri(routes::INDEX)
                    .header(header::IF_NONE_MATCH, tag)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
    }
}
