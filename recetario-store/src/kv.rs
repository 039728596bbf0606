//! The persistent key-value substrate.
//!
//! Whole values under fixed string keys, read and written synchronously by
//! exactly one session. Two implementations: [`FileKv`] (one UTF-8 file
//! per key under a data directory) and [`MemoryKv`] (tests and ephemeral
//! runs).

use crate::{KvError, KvResult};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Synchronous string key-value storage.
pub trait KvStore {
    /// Reads the value under `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> KvResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> KvResult<()>;
}

/// In-memory substrate. Nothing survives the session.
#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
    entries: HashMap<String, String>,
}

impl MemoryKv {
    /// Creates an empty in-memory substrate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> KvResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed substrate: each key is one UTF-8 file in the data directory.
#[derive(Debug, Clone)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Opens the substrate at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> KvResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The data directory backing this substrate.
    #[must_use]
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> KvResult<PathBuf> {
        // Keys are plain names, never paths.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(KvError::Unavailable(format!("invalid key: {key:?}")));
        }
        Ok(self.dir.join(key))
    }
}

impl KvStore for FileKv {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> KvResult<()> {
        let path = self.path_for(key)?;
        fs::write(path, value)?;
        Ok(())
    }
}
