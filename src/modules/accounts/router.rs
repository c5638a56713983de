use axum::{Router, routing::get};

use crate::modules::accounts::controller::accounts_status;
use crate::state::AppState;

pub fn init_accounts_router() -> Router<AppState> {
    Router::new().route("/", get(accounts_status))
}
