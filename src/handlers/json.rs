use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

/// JSON responder that pretty-prints its payload
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
        }
    }
}

/// GET /json/jackson handler - fixed pretty-printed JSON payload
pub async fn json_handler() -> PrettyJson<serde_json::Value> {
    PrettyJson(json!({ "hello": "world" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::{Router, routing::get};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route(routes::JSON, get(json_handler))
    }

    #[tokio::test]
    async fn test_json_payload() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(routes::JSON)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();

        // Indented output, not the compact form
        assert!(body.contains('\n'));

        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, json!({ "hello": "world" }));
    }
}
