// SPDX-License-Identifier: MIT

//! Request logging middleware.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    middleware::Next,
    response::Response,
};

/// Log every request: method, path, query keys, and body key=value pairs.
///
/// Observational only; the request is reassembled and passed on untouched.
pub async fn log_request(req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();

    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to read request body for logging");
            Bytes::new()
        }
    };

    let query_keys: Vec<&str> = parts
        .uri
        .query()
        .map(|query| {
            query
                .split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| pair.split('=').next().unwrap_or(""))
                .collect()
        })
        .unwrap_or_default();

    let body_fields: Vec<String> = serde_json::from_slice::<serde_json::Value>(&bytes)
        .ok()
        .and_then(|value| value.as_object().cloned())
        .map(|object| {
            object
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect()
        })
        .unwrap_or_default();

    tracing::info!(
        method = %parts.method,
        path = parts.uri.path(),
        query = ?query_keys,
        body = ?body_fields,
        "Request"
    );

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::{routing::post, Router};
    use tower::ServiceExt; // for oneshot

    #[tokio::test]
    async fn test_request_passes_through_unchanged() {
        let app = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .layer(axum::middleware::from_fn(log_request));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/echo?from=2023-01-01&limit=5")
                    .body(Body::from(r#"{"username":"fcc_test"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_success());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"username":"fcc_test"}"#);
    }
}
