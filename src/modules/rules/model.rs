use serde::Serialize;
use utoipa::ToSchema;

/// Status payload reported by the rules module.
#[derive(Serialize, ToSchema)]
pub struct RulesStatus {
    pub app: String,
    pub status: String,
}
