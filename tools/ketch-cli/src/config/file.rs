use super::CliConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Get the configuration directory path
pub fn get_config_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
    Ok(home_dir.join(".ketch"))
}

/// Get the configuration file path. `KETCH_CONFIG_PATH` overrides the
/// default location (used by integration tests and CI).
pub fn get_config_file_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("KETCH_CONFIG_PATH") {
        return Ok(PathBuf::from(path));
    }
    Ok(get_config_dir()?.join("config.yml"))
}

/// Load configuration from file
pub async fn load_config() -> Result<CliConfig> {
    let config_path = get_config_file_path()?;
    load_config_from_path(&config_path).await
}

/// Load configuration from a specific path
pub async fn load_config_from_path(config_path: &Path) -> Result<CliConfig> {
    if !config_path.exists() {
        return Err(anyhow::anyhow!("Configuration file does not exist"));
    }

    let content = fs::read_to_string(config_path).await.with_context(|| {
        format!("Failed to read config file: {:?}", config_path)
    })?;

    let config: CliConfig = serde_yaml::from_str(&content)
        .with_context(|| "Failed to parse configuration file")?;

    Ok(config)
}

/// Save configuration to file
pub async fn save_config(config: &CliConfig) -> Result<()> {
    let config_path = get_config_file_path()?;
    save_config_to_path(config, &config_path).await
}

/// Save configuration to a specific path
pub async fn save_config_to_path(
    config: &CliConfig,
    config_path: &Path,
) -> Result<()> {
    if let Some(config_dir) = config_path.parent() {
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await.with_context(|| {
                format!("Failed to create config directory: {:?}", config_dir)
            })?;
        }
    }

    let content = serde_yaml::to_string(config)
        .with_context(|| "Failed to serialize configuration")?;

    fs::write(config_path, content).await.with_context(|| {
        format!("Failed to write config file: {:?}", config_path)
    })?;

    Ok(())
}
