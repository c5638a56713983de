use axum::Json;

use crate::modules::rules::model::RulesStatus;

/// Rules module status
#[utoipa::path(
    get,
    path = "/rules",
    responses(
        (status = 200, description = "Module is registered and ready", body = RulesStatus)
    ),
    tag = "Rules"
)]
pub async fn rules_status() -> Json<RulesStatus> {
    Json(RulesStatus {
        app: "rules".to_string(),
        status: "ready".to_string(),
    })
}
