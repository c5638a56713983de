use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::env::Env;
use crate::error::ConfigError;

/// Environment variable that selects the active profile.
pub const PROFILE_VAR: &str = "APP_ENV";

/// Deployment profile selecting which configuration overlay applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Development,
    Production,
    Testing,
}

impl Profile {
    /// Read the profile from `APP_ENV`, defaulting to development.
    pub fn from_env(env: &Env) -> Result<Self, ConfigError> {
        match env.get(PROFILE_VAR) {
            Some(raw) => raw.parse(),
            None => Ok(Self::Development),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "testing" | "test" => Ok(Self::Testing),
            _ => Err(ConfigError::invalid(
                PROFILE_VAR,
                format!("unknown profile `{raw}`, expected development, production or testing"),
            )),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
