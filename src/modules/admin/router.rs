use axum::{Router, routing::get};

use crate::modules::admin::controller::{app_detail, site_index};
use crate::state::AppState;

pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(site_index))
        .route("/apps/{label}", get(app_detail))
}
