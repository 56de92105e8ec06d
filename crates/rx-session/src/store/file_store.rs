use crate::store::{KeyValueStore, StoreError, StoreResult, stored_entry::StoredEntry};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Key-value store keeping one JSON file per key in a directory.
///
/// Survives restarts the way browser local storage survives reloads.
pub struct FileStore {
    dir: PathBuf,
    write_seq: AtomicU64,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::dir_creation(dir.clone(), e))?;

        debug!("Opened file store at {dir:?}");
        Ok(Self {
            dir,
            write_seq: AtomicU64::new(0),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[track_caller]
    fn entry_path(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(StoreError::invalid_key(key));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Moves an unreadable entry aside as `<key>.json.corrupted.<timestamp>`.
    fn backup_corrupted(&self, path: &Path) {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return;
        };

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.dir.join(format!("{file_name}.corrupted.{timestamp}"));

        match fs::rename(path, &backup_path) {
            Ok(()) => warn!("Backed up corrupted entry to {backup_path:?}"),
            Err(e) => warn!("Failed to back up corrupted entry {path:?}: {e}"),
        }
    }

    fn create_temp_file(path: &Path) -> std::io::Result<fs::File> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        options.open(path)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.entry_path(key)?;

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::file_read(path, e)),
        };

        match serde_json::from_str::<StoredEntry>(&contents) {
            Ok(entry) => Ok(Some(entry.value)),
            Err(e) => {
                warn!("Stored entry corrupted at {path:?}: {e}");
                self.backup_corrupted(&path);
                Ok(None)
            }
        }
    }

    /// Writes to a temp file, syncs it, then renames over the entry so a
    /// crash mid-write never leaves a torn value behind.
    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let final_path = self.entry_path(key)?;
        let seq = self.write_seq.fetch_add(1, Ordering::Relaxed);
        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}.{seq}", std::process::id()));

        let json = serde_json::to_string(&StoredEntry::new(value))?;

        {
            let mut file = Self::create_temp_file(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Stored entry '{key}'");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.entry_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed entry '{key}'");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::file_remove(path, e)),
        }
    }
}
