mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

/// Local development backend
const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_API_TIMEOUT_SECS: u64 = 15;
const MIN_API_TIMEOUT_SECS: u64 = 1;
const MAX_API_TIMEOUT_SECS: u64 = 300;
const DEFAULT_STORAGE_DIRECTORY: &str = "session";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
