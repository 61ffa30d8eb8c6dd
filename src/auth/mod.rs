//! Optional pre-shared-key guard for the `/api` routes.
//!
//! Keys are compared in constant time. With no key configured every request passes.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::errors::AppError;

/// Header name for the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Reject requests that do not carry the expected key.
pub async fn psk_auth_layer(
    expected_psk: Option<String>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = expected_psk else {
        return next.run(request).await;
    };

    match presented_key(&request) {
        Some(key) if keys_match(key, &expected) => next.run(request).await,
        Some(_) => unauthorized_response("Invalid API key"),
        None => unauthorized_response("Missing API key"),
    }
}

/// The key from `x-api-key`, falling back to an `Authorization: Bearer` token.
fn presented_key(request: &Request) -> Option<&str> {
    let headers = request.headers();

    headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
        })
}

fn keys_match(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

fn unauthorized_response(message: &str) -> Response {
    AppError::Unauthorized(message.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn guarded(psk: Option<&str>) -> Router {
        let psk = psk.map(str::to_string);
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn(move |req, next| {
                psk_auth_layer(psk.clone(), req, next)
            }))
    }

    async fn status_for(router: Router, header: Option<(&str, &str)>) -> StatusCode {
        let mut builder = Request::builder().uri("/ping");
        if let Some((name, value)) = header {
            builder = builder.header(name, value);
        }
        let response = router
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[test]
    fn test_keys_match() {
        assert!(keys_match("test-key-123", "test-key-123"));
        assert!(!keys_match("test-key-123", "test-key-124"));
        assert!(!keys_match("short", "much-longer-key"));
        assert!(keys_match("", ""));
    }

    #[tokio::test]
    async fn test_open_when_unconfigured() {
        assert_eq!(status_for(guarded(None), None).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_header_and_bearer_accepted() {
        let ok = status_for(guarded(Some("secret")), Some((API_KEY_HEADER, "secret"))).await;
        assert_eq!(ok, StatusCode::OK);

        let bearer = status_for(
            guarded(Some("secret")),
            Some(("authorization", "Bearer secret")),
        )
        .await;
        assert_eq!(bearer, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_or_wrong_key_rejected() {
        assert_eq!(
            status_for(guarded(Some("secret")), None).await,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(guarded(Some("secret")), Some((API_KEY_HEADER, "nope"))).await,
            StatusCode::UNAUTHORIZED
        );
    }
}
