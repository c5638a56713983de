use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Reject requests whose `Host` header does not match `allowed_hosts`.
///
/// Matching is delegated to the resolved settings: exact names, `.domain`
/// suffix wildcards and the catch-all `*`, ignoring any port suffix. A
/// request without a resolvable host is rejected unless the catch-all is
/// configured.
pub async fn enforce_allowed_hosts(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| req.uri().host());

    let allowed = match host {
        Some(host) => state.settings.host_allowed(host),
        None => state.settings.host_allowed("*"),
    };

    if !allowed {
        let host = host.unwrap_or("<missing>");
        warn!(host = %host, "Rejected request for disallowed host");
        return AppError::bad_request(anyhow::anyhow!("disallowed host: {host}")).into_response();
    }

    next.run(req).await
}
