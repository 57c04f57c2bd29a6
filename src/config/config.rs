use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::constants::CONFIG_FILE;
use crate::error::{ExportError, ExportResult};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_token: Option<String>,
    pub default_workspace: Option<String>,
}

pub fn load_config() -> Config {
    let Some(home_dir) = dirs::home_dir() else {
        return Config::default();
    };
    let config_path = home_dir.join(CONFIG_FILE);

    if config_path.exists() {
        fs::read_to_string(&config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> ExportResult<()> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ExportError::ConfigError("Could not find home directory".to_string()))?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

pub fn get_api_token() -> ExportResult<String> {
    // First check environment variable
    if let Ok(token) = env::var("ASANA_ACCESS_TOKEN") {
        return Ok(token);
    }

    // Then check config file
    let config = load_config();
    if let Some(token) = config.api_token {
        return Ok(token);
    }

    Err(ExportError::ApiTokenNotFound)
}
