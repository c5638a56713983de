use axum::Json;

use crate::modules::accounts::model::AccountsStatus;

/// Accounts module status
#[utoipa::path(
    get,
    path = "/accounts",
    responses(
        (status = 200, description = "Module is registered and ready", body = AccountsStatus)
    ),
    tag = "Accounts"
)]
pub async fn accounts_status() -> Json<AccountsStatus> {
    Json(AccountsStatus {
        app: "accounts".to_string(),
        status: "ready".to_string(),
    })
}
