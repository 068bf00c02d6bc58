use crate::error::CliError;
use std::{collections::HashMap, fs, path::Path};

/// Environment map assembled from the system environment plus optional
/// `.env` overlays. File values win over inherited ones.
#[derive(Debug, Clone, Default)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

impl EnvManager {
    pub fn new() -> Self {
        EnvManager {
            vars: std::env::vars().collect(),
        }
    }

    pub fn all(&self) -> &HashMap<String, String> {
        &self.vars
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Overlays variables from a `.env`-style file.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|err| CliError::EnvFile(format!("{}: {err}", path.display())))?;
        self.apply(&content)
    }

    fn apply(&mut self, content: &str) -> Result<(), CliError> {
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(CliError::EnvFile(format!(
                    "line {}: expected KEY=VALUE",
                    number + 1
                )));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::EnvFile(format!("line {}: empty key", number + 1)));
            }
            self.vars.insert(key.to_string(), unquote(value.trim()).to_string());
        }
        Ok(())
    }
}

fn unquote(value: &str) -> &str {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value)
}
