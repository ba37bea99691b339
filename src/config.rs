//! Application configuration.
//!
//! The original application read feature flags and user context from
//! globals hung off the window object. Here configuration is an explicit
//! struct loaded once and passed down; nothing in the library reads
//! ambient state.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::CardError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Root of the contact workspace. Exports land in `{workspace}/Contacts`
    /// unless `export_dir` overrides it.
    pub workspace_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Warn when a contact entry carries a type the encoder can't map.
    #[serde(default = "default_warn_unsupported")]
    pub warn_unsupported_types: bool,
}

fn default_warn_unsupported() -> bool {
    true
}

impl AppConfig {
    /// Directory where exported cards land.
    pub fn export_dir(&self) -> PathBuf {
        match &self.export_dir {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(&self.workspace_path).join("Contacts"),
        }
    }
}

/// Load configuration from ~/.rolo/config.json
pub fn load_config() -> Result<AppConfig, CardError> {
    let home = dirs::home_dir()
        .ok_or_else(|| CardError::ConfigError("Could not find home directory.".to_string()))?;
    let config_path = home.join(".rolo").join("config.json");

    if !config_path.exists() {
        return Err(CardError::ConfigError(format!(
            "Config file not found at {}. Create it with: {{ \"workspacePath\": \"/path/to/workspace\" }}.",
            config_path.display()
        )));
    }

    let content = std::fs::read_to_string(&config_path)
        .map_err(|e| CardError::ConfigError(format!("Failed to read config: {}.", e)))?;

    let config: AppConfig = serde_json::from_str(&content)
        .map_err(|e| CardError::ConfigError(format!("Failed to parse config: {}.", e)))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minimal_config() {
        let config: AppConfig =
            serde_json::from_str("{\"workspacePath\": \"/tmp/ws\"}").unwrap();
        assert_eq!(config.workspace_path, "/tmp/ws");
        assert!(config.warn_unsupported_types);
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/ws/Contacts"));
    }

    #[test]
    fn test_export_dir_override() {
        let config: AppConfig = serde_json::from_str(
            "{\"workspacePath\": \"/tmp/ws\", \"exportDir\": \"/tmp/cards\"}",
        )
        .unwrap();
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/cards"));
    }

    #[test]
    fn test_warn_flag_round_trips() {
        let config: AppConfig = serde_json::from_str(
            "{\"workspacePath\": \"/ws\", \"warnUnsupportedTypes\": false}",
        )
        .unwrap();
        assert!(!config.warn_unsupported_types);
    }
}
