use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Apply the resolved security settings to every response.
///
/// Plain-HTTP requests are redirected to HTTPS first when `ssl_redirect`
/// is set; the scheme check honors `X-Forwarded-Proto` so the redirect
/// works behind a TLS-terminating proxy.
pub async fn security_headers(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let security = &state.settings.security;

    if security.ssl_redirect && !request_is_secure(&req) {
        if let Some(location) = https_location(&req) {
            return (
                StatusCode::PERMANENT_REDIRECT,
                [(header::LOCATION, location)],
            )
                .into_response();
        }
    }

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    if security.hsts_seconds > 0 {
        if let Ok(value) = HeaderValue::from_str(&security.hsts_header_value()) {
            headers.insert(header::STRICT_TRANSPORT_SECURITY, value);
        }
    }
    if security.content_type_nosniff {
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );
    }
    if security.browser_xss_filter {
        headers.insert(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        );
    }
    if let Ok(value) = HeaderValue::from_str(&security.x_frame_options) {
        headers.insert(header::X_FRAME_OPTIONS, value);
    }
    if let Ok(value) = HeaderValue::from_str(&security.referrer_policy) {
        headers.insert(header::REFERRER_POLICY, value);
    }

    response
}

fn request_is_secure(req: &Request) -> bool {
    if req.uri().scheme_str() == Some("https") {
        return true;
    }
    req.headers()
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|proto| proto.eq_ignore_ascii_case("https"))
}

fn https_location(req: &Request) -> Option<String> {
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| req.uri().host())?;
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    Some(format!("https://{host}{path_and_query}"))
}
