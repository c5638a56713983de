use axum::{Json, extract::Path};

use crate::modules::admin::model::{AppEntry, SiteIndex};
use crate::modules::{find_app, installed_apps};
use crate::utils::errors::{AppError, ErrorResponse};

/// Admin site index
#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Registered application modules", body = SiteIndex)
    ),
    tag = "Admin"
)]
pub async fn site_index() -> Json<SiteIndex> {
    Json(SiteIndex {
        apps: installed_apps().iter().map(AppEntry::from).collect(),
    })
}

/// Look up a registered application module by label
#[utoipa::path(
    get,
    path = "/admin/apps/{label}",
    params(
        ("label" = String, Path, description = "Application module label")
    ),
    responses(
        (status = 200, description = "Module descriptor", body = AppEntry),
        (status = 404, description = "No module with that label", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn app_detail(Path(label): Path<String>) -> Result<Json<AppEntry>, AppError> {
    find_app(&label)
        .map(|app| Json(AppEntry::from(app)))
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("unknown app `{label}`")))
}
