use crate::error::{RecipeError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file expected next to the executable
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable that points at a configuration file elsewhere
pub const CONFIG_PATH_ENV: &str = "FLYER_CHEF_CONFIG";

/// Top-level application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// OpenAI-compatible API settings
    #[serde(default)]
    pub openai: OpenAiConfig,
}

/// Settings for the chat completion API
#[derive(Debug, Deserialize, Clone)]
pub struct OpenAiConfig {
    /// API key for authentication
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for proxies and compatible servers)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used to read the flyer image
    #[serde(default = "default_vision_model")]
    pub vision_model: String,
    /// Model used to write recipes
    #[serde(default = "default_recipe_model")]
    pub recipe_model: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            vision_model: default_vision_model(),
            recipe_model: default_recipe_model(),
            timeout: default_timeout(),
        }
    }
}

impl OpenAiConfig {
    /// The configured API key, rejecting absent or blank values
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(RecipeError::MissingApiKey)
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_vision_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_recipe_model() -> String {
    "gpt-4o".to_string()
}

fn default_timeout() -> u64 {
    120
}

impl AppConfig {
    /// Load configuration from the co-located file and environment variables
    pub fn load() -> Result<Self> {
        load_config(&config_path())
    }
}

/// Resolve where the configuration file lives
///
/// `FLYER_CHEF_CONFIG` wins when set, otherwise `config.toml` in the
/// directory of the running executable.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Load configuration from `path` and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with FLYER_CHEF__ prefix
/// 2. The TOML file at `path` (must exist)
/// 3. Default values
///
/// Environment variable format: FLYER_CHEF__OPENAI__API_KEY
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let settings = Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml).required(true))
        .add_source(
            Environment::with_prefix("FLYER_CHEF")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    // Fail at startup rather than on the first request
    config.openai.api_key()?;
    Ok(config)
}
