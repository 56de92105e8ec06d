use serde::{Deserialize, Serialize};

/// On-disk representation of one stored value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoredEntry {
    pub value: String,
    /// RFC 3339 timestamp of the last write
    pub updated_at: String,
}

impl StoredEntry {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
