mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{production_env, send_get, test_app, test_app_with};
use mettai_config::Profile;
use tower::ServiceExt;

fn production_app() -> axum::Router {
    test_app_with(Profile::Production, production_env())
}

/// Production requests come through a TLS-terminating proxy in front of the
/// service; the forwarded-proto header is what marks them secure.
async fn send_secure_get(app: axum::Router, uri: &str, host: &str) -> axum::response::Response {
    let request = Request::builder()
        .uri(uri)
        .header("host", host)
        .header("x-forwarded-proto", "https")
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_disallowed_host_is_rejected() {
    let app = test_app(Profile::Testing);

    let response = send_get(app, "/healthz", "evil.example.com").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_allowed_host_with_port_passes() {
    let app = test_app(Profile::Testing);

    let response = send_get(app, "/healthz", "localhost:8000").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_suffix_wildcard_host_matches_subdomains() {
    let app = production_app();

    let response = send_secure_get(app.clone(), "/healthz", "api.mettai.dev").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send_secure_get(app, "/healthz", "mettai.dev.evil.com").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_plain_http_redirects_to_https_in_production() {
    let app = production_app();

    let response = send_get(app, "/healthz", "api.mettai.app").await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);

    let location = response.headers().get(header::LOCATION).unwrap();
    assert_eq!(location, "https://api.mettai.app/healthz");
}

#[tokio::test]
async fn test_production_responses_carry_security_headers() {
    let app = production_app();

    let response = send_secure_get(app, "/healthz", "api.mettai.app").await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers.get(header::STRICT_TRANSPORT_SECURITY).unwrap(),
        "max-age=31536000; includeSubDomains; preload"
    );
    assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
    assert_eq!(headers.get(header::REFERRER_POLICY).unwrap(), "same-origin");
    assert_eq!(headers.get(header::X_XSS_PROTECTION).unwrap(), "1; mode=block");
}

#[tokio::test]
async fn test_development_has_no_hsts_and_no_redirect() {
    let app = test_app(Profile::Development);

    let response = send_get(app, "/healthz", "localhost").await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert!(headers.get(header::STRICT_TRANSPORT_SECURITY).is_none());
    // Baseline headers stay on in every profile.
    assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
}

#[tokio::test]
async fn test_development_cors_allows_any_origin() {
    let app = test_app(Profile::Development);

    let request = Request::builder()
        .uri("/healthz")
        .header("host", "localhost")
        .header(header::ORIGIN, "https://anywhere.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_production_cors_echoes_configured_origin_only() {
    let app = production_app();

    let request = Request::builder()
        .uri("/healthz")
        .header("host", "api.mettai.app")
        .header("x-forwarded-proto", "https")
        .header(header::ORIGIN, "https://app.mettai.app")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://app.mettai.app"
    );

    let request = Request::builder()
        .uri("/healthz")
        .header("host", "api.mettai.app")
        .header("x-forwarded-proto", "https")
        .header(header::ORIGIN, "https://not-configured.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
