//! File-backed store

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::store::{Store, StoreError};

/// A [`Store`] persisting its keys as a single JSON object on disk.
///
/// The file holds a flat mapping of key to string value, read in full on
/// every `get` and rewritten in full on every `set` or `remove`, the same
/// whole-value overwrite semantics browser local storage exposes.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store persisting to the given file path.
    ///
    /// The file is created lazily on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Returns the path the store persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<HashMap<String, String>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(error) => return Err(error.into()),
        };

        Ok(serde_json::from_str(&contents)?)
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), StoreError> {
        let contents = serde_json::to_string(map)?;
        fs::write(&self.path, contents)?;

        Ok(())
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());

        self.write_map(&map)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;

        if map.remove(key).is_none() {
            return Ok(());
        }

        self.write_map(&map)
    }
}
