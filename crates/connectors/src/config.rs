use crate::error::ConfigError;
use std::collections::HashMap;

pub const BACKEND_URL_VAR: &str = "STOCKFLOW_BACKEND_URL";
pub const BACKEND_KEY_VAR: &str = "STOCKFLOW_BACKEND_ANON_KEY";

/// Connection settings for the hosted backend service.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url: String = url.into();
        BackendConfig {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// Reads the config out of an environment map (system environment plus
    /// whatever `.env` overlay the caller assembled).
    pub fn from_env_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let url = required(vars, BACKEND_URL_VAR)?;
        let anon_key = required(vars, BACKEND_KEY_VAR)?;
        Ok(BackendConfig::new(url, anon_key))
    }
}

fn required<'a>(
    vars: &'a HashMap<String, String>,
    name: &'static str,
) -> Result<&'a str, ConfigError> {
    vars.get(name)
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingVar(name))
}
