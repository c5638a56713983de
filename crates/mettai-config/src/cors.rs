use serde::Serialize;

use crate::env::Env;
use crate::error::ConfigError;
use crate::profile::Profile;

/// Cross-origin request settings.
///
/// Development allows any origin; other profiles use the configured
/// allow-list from `CORS_ALLOWED_ORIGINS`.
#[derive(Clone, Debug, Serialize)]
pub struct CorsConfig {
    pub allow_all_origins: bool,
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub(crate) fn resolve(profile: Profile, env: &Env) -> Result<Self, ConfigError> {
        let allowed_origins = env.list("CORS_ALLOWED_ORIGINS").unwrap_or_default();

        Ok(Self {
            allow_all_origins: profile == Profile::Development,
            allowed_origins,
        })
    }
}
