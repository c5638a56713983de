use std::path::PathBuf;

use serde::Serialize;

use crate::env::Env;
use crate::error::ConfigError;
use crate::profile::Profile;

/// Static asset serving settings.
#[derive(Clone, Debug, Serialize)]
pub struct StaticFilesConfig {
    /// Mount prefix, always with a leading and without a trailing slash.
    pub url: String,
    pub root: PathBuf,
    /// Production serves precompressed assets alongside the originals.
    pub precompressed: bool,
}

impl StaticFilesConfig {
    pub(crate) fn resolve(profile: Profile, env: &Env) -> Result<Self, ConfigError> {
        let raw = env.string("STATIC_URL", "/static");
        if !raw.starts_with('/') {
            return Err(ConfigError::invalid(
                "STATIC_URL",
                format!("expected an absolute path prefix, got `{raw}`"),
            ));
        }
        let url = raw.trim_end_matches('/').to_string();
        if url.is_empty() {
            return Err(ConfigError::invalid(
                "STATIC_URL",
                "must not be the root path",
            ));
        }

        Ok(Self {
            url,
            root: PathBuf::from(env.string("STATIC_ROOT", "staticfiles")),
            precompressed: profile.is_production(),
        })
    }
}
