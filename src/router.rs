use axum::http::{HeaderValue, Method};
use axum::{Json, Router, middleware, routing::get};
use chrono::{DateTime, Utc};
use mettai_config::{CorsConfig, StaticFilesConfig};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::ToSchema;

use crate::debug::init_debug_router;
use crate::logging::logging_middleware;
use crate::middleware::allowed_hosts::enforce_allowed_hosts;
use crate::middleware::security::security_headers;
use crate::modules::admin::init_admin_router;
use crate::modules::installed_apps;
use crate::state::AppState;

/// Assemble the full application router for the resolved settings.
///
/// The dispatch table is static: the admin group, every installed app under
/// its prefix, the health probe and the static mount. The debug route set
/// is merged only when the debug flag is enabled.
pub fn init_router(state: AppState) -> Router {
    let settings = state.settings.clone();

    let mut app = Router::new()
        .route("/healthz", get(healthz))
        .nest("/admin", init_admin_router());

    for descriptor in installed_apps() {
        app = app.nest(descriptor.prefix, descriptor.router());
    }

    if settings.debug {
        app = app.merge(init_debug_router());
    }

    app.nest_service(
        settings.static_files.url.as_str(),
        static_service(&settings.static_files),
    )
    .with_state(state.clone())
    .layer(cors_layer(&settings.cors))
    .layer(middleware::from_fn_with_state(
        state.clone(),
        security_headers,
    ))
    .layer(middleware::from_fn_with_state(state, enforce_allowed_hosts))
    .layer(middleware::from_fn(logging_middleware))
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub time: DateTime<Utc>,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        time: Utc::now(),
    })
}

fn static_service(config: &StaticFilesConfig) -> ServeDir {
    let service = ServeDir::new(&config.root);
    if config.precompressed {
        service.precompressed_gzip()
    } else {
        service
    }
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allow_all_origins {
        return CorsLayer::permissive();
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
}
