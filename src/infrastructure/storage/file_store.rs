//! File-backed key-value store
//!
//! Each key lives in `<dir>/<key>.json`. Writes go to a sibling temp file
//! that is then renamed over the target, so a crash mid-write leaves the
//! previous value intact.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::ports::{KeyValueStore, StorageError};

/// Durable store rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default data directory (`$XDG_DATA_HOME/voice-notes`), if one exists
    pub fn default_dir() -> Option<PathBuf> {
        crate::infrastructure::paths::data_dir()
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }

    fn write_atomic(&self, path: &Path, value: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, path)
    }
}

impl KeyValueStore for FileStore {
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a
    /// damaged file reaches the caller as unparseable text
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed {
                key: key.to_string(),
                message: format!("{}: {}", path.display(), e),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        self.write_atomic(&path, value)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                message: format!("{}: {}", path.display(), e),
            })?;
        debug!(path = %path.display(), bytes = value.len(), "stored");
        Ok(())
    }
}
