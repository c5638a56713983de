use serde::Serialize;
use utoipa::ToSchema;

/// Status payload reported by the accounts module.
#[derive(Serialize, ToSchema)]
pub struct AccountsStatus {
    pub app: String,
    pub status: String,
}
