use axum::response::Response;

use crate::error::AppError;

/// GET /error handler - always fails, exercising the error page path
pub async fn error_handler() -> Result<Response, AppError> {
    Err(AppError::InvalidState(
        "An invalid place to be …".to_string(),
    ))
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
        Router::new().route(routes::ERROR, get(error_handler))
    }

    #[tokio::test]
    async fn test_error_route_renders_error_page() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(routes::ERROR)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("An invalid place to be …"));
    }

    #[tokio::test]
    async fn test_error_route_is_never_2xx() {
        for _ in 0..3 {
            let response = app()
                .oneshot(
                    Request::builder()
                        .uri(routes::ERROR)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert!(!response.status().is_success());
        }
    }
}
