// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{AltTextError, Result};
use config::{Config, Environment, File};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load configuration from the process environment with precedence:
    /// 1. Well-known variables (`OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_BASE_URL`, `UPLOAD_LIMIT`)
    /// 2. `IMG_ALT__SECTION__FIELD` variables
    /// 3. Config file (explicit path, else `~/.img-alt-api/config.toml`)
    /// 4. Defaults (lowest)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_from(config_path, std::env::vars().collect())
    }

    /// Same as [`AppConfig::load`] but reads variables from `env` instead of the process.
    pub fn load_from(config_path: Option<&Path>, env: HashMap<String, String>) -> Result<Self> {
        let file_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        let lookup = |key: &str| env.get(key).filter(|v| !v.trim().is_empty()).cloned();

        let upload_limit = lookup("UPLOAD_LIMIT")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|e| {
                    AltTextError::Config(format!("UPLOAD_LIMIT must be a byte count, got {:?}: {}", raw, e))
                })
            })
            .transpose()?;

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(File::from(file_path).required(config_path.is_some()))
            // Override with prefixed environment variables
            .add_source(
                Environment::with_prefix("IMG_ALT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(env.clone())),
            )
            // Well-known variables win over everything but the CLI
            .set_override_option("openai.api_key", lookup("OPENAI_API_KEY"))?
            .set_override_option("openai.model", lookup("OPENAI_MODEL"))?
            .set_override_option("openai.api_base_url", lookup("OPENAI_BASE_URL"))?
            .set_override_option("vision.upload_limit", upload_limit)?
            .build()
            .map_err(|e| AltTextError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AltTextError::Config(e.to_string()))
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".img-alt-api")
            .join("config.toml")
    }
}
