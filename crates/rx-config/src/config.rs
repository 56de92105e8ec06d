use crate::{ApiConfig, ConfigError, ConfigErrorResult, LoggingConfig, StorageConfig};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for RX_CONFIG_DIR env var, else use ./.rx/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply RX_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: RX_CONFIG_DIR env var > ./.rx/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("RX_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".rx"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.storage.validate()?;

        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file cannot be empty when set"));
        }

        Ok(())
    }

    /// Absolute directory holding the persisted tokens.
    pub fn storage_dir(&self) -> ConfigErrorResult<PathBuf> {
        let dir = Path::new(&self.storage.dir);
        if dir.is_absolute() {
            return Ok(dir.to_path_buf());
        }

        Ok(Self::config_dir()?.join(dir))
    }

    /// Log configuration summary. Tokens are never part of the config.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        info!("  storage: {}", self.storage.dir);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.destination()
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("RX_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("RX_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Storage
        Self::apply_env_string("RX_STORAGE_DIR", &mut self.storage.dir);

        // Logging
        Self::apply_env_parse("RX_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("RX_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("RX_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
