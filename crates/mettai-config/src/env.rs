use std::collections::HashMap;

use crate::error::ConfigError;

/// Immutable snapshot of environment variables.
///
/// Settings resolution reads from a snapshot instead of `std::env` directly,
/// so tests can compose environments from literals without mutating process
/// state. A variable set to the empty string counts as unset.
#[derive(Clone, Debug, Default)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder-style insert, mainly for tests.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    pub fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key)
            .map(str::to_string)
            .ok_or(ConfigError::MissingKey { key })
    }

    pub fn bool(&self, key: &'static str, default: bool) -> Result<bool, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => parse_bool(raw)
                .ok_or_else(|| ConfigError::invalid(key, format!("expected a boolean, got `{raw}`"))),
        }
    }

    pub fn u16(&self, key: &'static str, default: u16) -> Result<u16, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.parse().map_err(|_| {
                ConfigError::invalid(key, format!("expected an integer in 0..=65535, got `{raw}`"))
            }),
        }
    }

    pub fn u32(&self, key: &'static str, default: u32) -> Result<u32, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::invalid(key, format!("expected an integer, got `{raw}`"))),
        }
    }

    /// Comma-separated list; entries are trimmed and empties dropped.
    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        self.get(key).map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    pub fn required_list(&self, key: &'static str) -> Result<Vec<String>, ConfigError> {
        let values = self.list(key).ok_or(ConfigError::MissingKey { key })?;
        if values.is_empty() {
            return Err(ConfigError::invalid(
                key,
                "expected a non-empty, comma-separated list",
            ));
        }
        Ok(values)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
