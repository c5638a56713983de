use serde::Serialize;

use crate::env::Env;
use crate::error::ConfigError;

/// Listener address settings.
#[derive(Clone, Debug, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub(crate) fn resolve(env: &Env) -> Result<Self, ConfigError> {
        Ok(Self {
            host: env.string("HOST", "0.0.0.0"),
            port: env.u16("PORT", 8000)?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
