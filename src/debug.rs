//! Debug-only route set.
//!
//! Mounted under `/__debug__` only when the resolved settings enable the
//! debug flag: interactive API docs plus a panel exposing the resolved
//! settings with secrets masked.

use axum::{Json, Router, extract::State, routing::get};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn init_debug_router() -> Router<AppState> {
    Router::new()
        .merge(
            SwaggerUi::new("/__debug__/swagger-ui")
                .url("/__debug__/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Scalar::with_url("/__debug__/scalar", ApiDoc::openapi()))
        .route("/__debug__/settings", get(settings_panel))
}

/// Resolved settings for the running process, secrets masked
#[utoipa::path(
    get,
    path = "/__debug__/settings",
    responses(
        (status = 200, description = "Resolved settings as JSON")
    ),
    tag = "Debug"
)]
pub async fn settings_panel(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let settings = serde_json::to_value(state.settings.as_ref())?;
    Ok(Json(settings))
}
