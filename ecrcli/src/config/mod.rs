use crate::format::{ColorChoice, OutputFormat};
use libecr::Settings;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Style configuration
    #[serde(default)]
    pub style: StyleConfig,
    /// AWS connection settings
    #[serde(default)]
    pub aws: Settings,
}

/// Style configuration section
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StyleConfig {
    /// Output format: pretty, json, yaml
    #[serde(default)]
    pub format: OutputFormat,
    /// Color output control: auto, always, never
    #[serde(default)]
    pub color: ColorChoice,
}

impl Config {
    /// Load configuration from a file
    ///
    /// The `[aws]` section is checked when a client is built, not here.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, toml_str).map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }
}

/// Get the config file path, respecting ECRCLI_CONFIG environment variable
pub fn get_config_path() -> PathBuf {
    if let Ok(config_path) = env::var("ECRCLI_CONFIG") {
        return PathBuf::from(config_path);
    }

    // ~/.config/ecrcli/config.toml on Linux
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("ecrcli").join("config.toml")
    } else {
        PathBuf::from("config.toml")
    }
}

/// Initialize a new config file with default values
pub fn init_config(config_path: &Path) -> Result<(), String> {
    if config_path.exists() {
        return Err(format!(
            "Config file already exists at {}. Use 'ecrcli config set' to change it.",
            config_path.display()
        ));
    }

    Config::default().save(config_path)
}

/// Get a configuration value by key (supports nested keys like "style.format")
pub fn get_config_value(config: &Config, key: &str) -> Result<String, String> {
    let parts: Vec<&str> = key.split('.').collect();

    let value = match parts.as_slice() {
        ["style", "format"] => Some(config.style.format.to_string()),
        ["style", "color"] => Some(config.style.color.to_string()),
        ["aws", "region"] => config.aws.region.clone(),
        ["aws", "profile"] => config.aws.profile.clone(),
        ["aws", "endpoint_url"] => config.aws.endpoint_url.clone(),
        _ => return Err(format!("Unknown config key: {}", key)),
    };

    Ok(value.unwrap_or_default())
}

/// Set a configuration value by key and write the file back.
///
/// An empty value unsets an `aws.*` key.
pub fn set_config_value(config_path: &Path, key: &str, value: &str) -> Result<(), String> {
    let mut config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        Config::default()
    };

    let optional = || (!value.is_empty()).then(|| value.to_string());
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["style", "format"] => {
            config.style.format = parse_choice(value, &["pretty", "json", "yaml", "yml"])
                .map(OutputFormat::from)
                .ok_or_else(|| {
                    format!("Invalid format '{}': must be pretty, json or yaml", value)
                })?;
        }
        ["style", "color"] => {
            config.style.color = parse_choice(value, &["auto", "always", "never"])
                .map(ColorChoice::from)
                .ok_or_else(|| {
                    format!("Invalid color '{}': must be auto, always or never", value)
                })?;
        }
        ["aws", "region"] => config.aws.region = optional(),
        ["aws", "profile"] => config.aws.profile = optional(),
        ["aws", "endpoint_url"] => config.aws.endpoint_url = optional(),
        _ => return Err(format!("Unknown config key: {}", key)),
    }

    config.aws.validate().map_err(|e| e.to_string())?;
    config.save(config_path)
}

fn parse_choice<'a>(value: &'a str, allowed: &[&str]) -> Option<&'a str> {
    allowed
        .iter()
        .any(|choice| choice.eq_ignore_ascii_case(value))
        .then_some(value)
}
