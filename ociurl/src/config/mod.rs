use crate::format::{ColorChoice, Formattable, OutputFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Style configuration
    #[serde(default)]
    pub style: StyleConfig,
}

/// Style configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Output format: pretty, json, yaml
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    /// Color output control: auto, always, never
    #[serde(default = "default_color")]
    pub color: ColorChoice,
}

fn default_format() -> OutputFormat {
    OutputFormat::Pretty
}

fn default_color() -> ColorChoice {
    ColorChoice::Auto
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, toml_str).map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }
}

impl Formattable for Config {
    fn format_pretty(&self) -> String {
        format!(
            "[style]\nformat = \"{}\"\ncolor = \"{}\"\n",
            self.style.format.as_str(),
            self.style.color.as_str()
        )
    }
}

/// Get the config file path, respecting OCIURL_CONFIG environment variable
pub fn get_config_path() -> PathBuf {
    if let Ok(config_path) = env::var("OCIURL_CONFIG") {
        return PathBuf::from(config_path);
    }

    // Default to ~/.config/ociurl/config.toml
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("ociurl").join("config.toml")
    } else {
        PathBuf::from("config.toml")
    }
}

/// Initialize a new config file with default values
pub fn init_config(config_path: &Path) -> Result<(), String> {
    if config_path.exists() {
        return Err(format!(
            "Config file already exists at {}",
            config_path.display()
        ));
    }

    Config::default().save(config_path)
}

/// Get a configuration value by key (supports nested keys like "style.format")
pub fn get_config_value(config: &Config, key: &str) -> Result<String, String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["style", "format"] => Ok(config.style.format.as_str().to_string()),
        ["style", "color"] => Ok(config.style.color.as_str().to_string()),
        _ => Err(format!("Unknown config key: {}", key)),
    }
}
