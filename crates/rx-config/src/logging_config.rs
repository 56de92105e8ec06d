use crate::{DEFAULT_LOG_COLORED, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub colored: bool,
    /// Log to this file instead of stderr
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Where log records end up, for the startup summary
    pub fn destination(&self) -> &str {
        self.file.as_deref().unwrap_or("stderr")
    }
}
