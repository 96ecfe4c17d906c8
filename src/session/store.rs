use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};
use tracing::warn;

/// Persistence collaborator: a flat key/value store of JSON documents.
pub trait KeyValueStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn save(&self, key: &str, value: Value) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session file io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("session entry could not be encoded: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store lock poisoned")]
    Poisoned,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// Every key lives in one JSON object file, rewritten on each change. A missing, empty or
/// unparseable file reads as an empty store; the next write replaces it.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Map<String, Value>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(err.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => {
                warn!(
                    path = %self.path.display(),
                    "session file does not hold a JSON object; starting from an empty session"
                );
                Ok(Map::new())
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "session file is not valid JSON; starting from an empty session"
                );
                Ok(Map::new())
            }
        }
    }

    fn write(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let rendered = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, rendered)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(self.read()?.remove(key))
    }

    fn save(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut entries = self.read()?;
        entries.insert(key.to_string(), value);
        self.write(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut entries = self.read()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }
}
