use axum::{Router, routing::get};

use crate::modules::rules::controller::rules_status;
use crate::state::AppState;

pub fn init_rules_router() -> Router<AppState> {
    Router::new().route("/", get(rules_status))
}
