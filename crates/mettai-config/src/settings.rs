use serde::{Serialize, Serializer};

use crate::cors::CorsConfig;
use crate::database::DatabaseConfig;
use crate::env::Env;
use crate::error::ConfigError;
use crate::password::PasswordConfig;
use crate::profile::Profile;
use crate::security::SecurityConfig;
use crate::server::ServerConfig;
use crate::static_files::StaticFilesConfig;

/// Fallback secret for local development. Production resolution rejects it.
pub const DEV_SECRET_KEY: &str = "dev-secret-key-change-in-production";

/// Fixed secret used by the testing profile.
pub const TEST_SECRET_KEY: &str = "test-secret-key-for-testing-only";

/// Fully resolved application settings.
///
/// Composition order: base defaults, then the profile overlay, then
/// environment overrides. Resolution happens once at process start; the
/// value is never mutated afterwards.
#[derive(Clone, Debug, Serialize)]
pub struct Settings {
    pub profile: Profile,
    #[serde(serialize_with = "ser_masked")]
    pub secret_key: String,
    pub debug: bool,
    pub allowed_hosts: Vec<String>,
    pub internal_ips: Vec<String>,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub cors: CorsConfig,
    pub static_files: StaticFilesConfig,
    pub password: PasswordConfig,
}

impl Settings {
    /// Resolve settings for `profile` from the process environment.
    pub fn from_env(profile: Profile) -> Result<Self, ConfigError> {
        Self::load(profile, &Env::from_process())
    }

    /// Resolve settings for `profile` from an environment snapshot.
    ///
    /// Missing required keys and malformed values are fatal and name the
    /// offending variable.
    pub fn load(profile: Profile, env: &Env) -> Result<Self, ConfigError> {
        let secret_key = match profile {
            Profile::Development => env.string("SECRET_KEY", DEV_SECRET_KEY),
            Profile::Production => env.required("SECRET_KEY")?,
            // The testing overlay pins the secret regardless of the env.
            Profile::Testing => TEST_SECRET_KEY.to_string(),
        };

        let debug = match profile {
            Profile::Development => env.bool("DEBUG", true)?,
            // The overlay wins over the environment here: these profiles
            // never run with debug enabled.
            Profile::Production | Profile::Testing => false,
        };

        let allowed_hosts = match profile {
            Profile::Development => env
                .list("ALLOWED_HOSTS")
                .unwrap_or_else(|| vec!["localhost".to_string(), "127.0.0.1".to_string()]),
            Profile::Production => env.required_list("ALLOWED_HOSTS")?,
            Profile::Testing => vec![
                "localhost".to_string(),
                "127.0.0.1".to_string(),
                "testserver".to_string(),
            ],
        };

        let internal_ips = match profile {
            Profile::Development => vec!["127.0.0.1".to_string()],
            Profile::Production | Profile::Testing => Vec::new(),
        };

        let settings = Self {
            profile,
            secret_key,
            debug,
            allowed_hosts,
            internal_ips,
            server: ServerConfig::resolve(env)?,
            database: DatabaseConfig::resolve(profile, env)?,
            security: SecurityConfig::for_profile(profile),
            cors: CorsConfig::resolve(profile, env)?,
            static_files: StaticFilesConfig::resolve(profile, env)?,
            password: PasswordConfig::for_profile(profile),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Cross-key invariants. `load` runs this; it is public so callers can
    /// re-check a settings value they assembled or modified themselves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_key.is_empty() {
            return Err(ConfigError::invalid("SECRET_KEY", "must not be empty"));
        }
        if self.profile.is_production() && self.secret_key == DEV_SECRET_KEY {
            return Err(ConfigError::invalid(
                "SECRET_KEY",
                "must not be the development placeholder",
            ));
        }
        if self.allowed_hosts.is_empty() {
            return Err(ConfigError::invalid("ALLOWED_HOSTS", "must not be empty"));
        }
        if self.debug && self.security.ssl_redirect {
            return Err(ConfigError::conflict(
                "DEBUG must be disabled when SECURE_SSL_REDIRECT is enabled",
            ));
        }
        self.security.validate()
    }

    /// Whether `host` (an HTTP `Host` header value, possibly with a port)
    /// matches the allow-list. Patterns are exact names, `.domain` suffix
    /// wildcards or the catch-all `*`.
    pub fn host_allowed(&self, host: &str) -> bool {
        let bare = strip_port(host);
        if bare.is_empty() {
            return false;
        }
        let bare = bare.to_ascii_lowercase();

        self.allowed_hosts.iter().any(|pattern| {
            let pattern = pattern.to_ascii_lowercase();
            if pattern == "*" {
                return true;
            }
            if let Some(domain) = pattern.strip_prefix('.') {
                return bare == domain || bare.ends_with(pattern.as_str());
            }
            pattern == bare
        })
    }
}

/// Drop the `:port` suffix, leaving bracketed IPv6 literals intact.
fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return host.split_inclusive(']').next().unwrap_or(host);
    }
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}

fn ser_masked<S: Serializer>(_secret: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str("********")
}
