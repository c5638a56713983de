use std::sync::Arc;

use mettai_config::Settings;
use sqlx::PgPool;

use crate::db::init_db_pool;

/// Shared application state: the resolved settings and the database pool.
///
/// Settings are read-only after startup; the pool is sqlx's cheaply
/// cloneable handle.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub settings: Arc<Settings>,
}

pub fn init_app_state(settings: Settings) -> anyhow::Result<AppState> {
    let db = init_db_pool(&settings.database)?;
    Ok(AppState {
        db,
        settings: Arc::new(settings),
    })
}
