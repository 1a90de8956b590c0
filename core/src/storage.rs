use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::model::ItemRecord;
use crate::targets;
use crate::{Error, StorageAction};

pub const DEFAULT_OUTPUT_PATH: &str = "data.json";

pub trait ItemStore {
    /// Replaces whatever was stored before with `records`.
    fn save(&self, records: &[ItemRecord]) -> Result<(), Error>;

    fn describe(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<ItemRecord>, Error> {
        let contents = fs::read_to_string(&self.path).map_err(|source| Error::StorageIo {
            action: StorageAction::Load,
            path: Some(self.path_label()),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| Error::Json {
            action: StorageAction::Load,
            path: Some(self.path_label()),
            source,
        })
    }

    fn path_label(&self) -> String {
        self.path.display().to_string()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ItemStore for JsonFileStore {
    fn save(&self, records: &[ItemRecord]) -> Result<(), Error> {
        let payload = serde_json::to_string(records).map_err(|source| Error::Json {
            action: StorageAction::Save,
            path: Some(self.path_label()),
            source,
        })?;

        let temp_path = self.temp_path();
        let io_error = |source| Error::StorageIo {
            action: StorageAction::Save,
            path: Some(self.path_label()),
            source,
        };
        fs::write(&temp_path, payload.as_bytes()).map_err(io_error)?;
        if let Err(source) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(io_error(source));
        }

        debug!(
            target: targets::STORAGE,
            bytes = payload.len(),
            path = %self.path.display(),
            "Item file written"
        );
        info!(
            target: targets::STORAGE,
            count = records.len(),
            "Saved {} item(s) to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path_label()
    }
}

/// In-process store that remembers every save; can be switched to fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryItemStore {
    saves: Arc<Mutex<Vec<Vec<ItemRecord>>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_saves(&self, reason: impl Into<String>) {
        if let Ok(mut guard) = self.fail_with.lock() {
            *guard = Some(reason.into());
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn last_saved(&self) -> Option<Vec<ItemRecord>> {
        self.saves
            .lock()
            .ok()
            .and_then(|guard| guard.last().cloned())
    }
}

impl ItemStore for MemoryItemStore {
    fn save(&self, records: &[ItemRecord]) -> Result<(), Error> {
        if let Some(reason) = self.fail_with.lock().ok().and_then(|guard| guard.clone()) {
            return Err(Error::StorageIo {
                action: StorageAction::Save,
                path: None,
                source: std::io::Error::other(reason),
            });
        }
        if let Ok(mut guard) = self.saves.lock() {
            guard.push(records.to_vec());
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ItemRecord {
        ItemRecord {
            name: name.to_string(),
            desc: format!("{name} description"),
            link: format!("http://{name}"),
        }
    }

    #[test]
    fn json_store_overwrites_previous_contents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("data.json"));

        store
            .save(&[record("a"), record("b"), record("c")])
            .expect("first save");
        store.save(&[record("z")]).expect("second save");

        let loaded = store.load().expect("load");
        assert_eq!(loaded, vec![record("z")]);
        assert!(!dir.path().join("data.json.tmp").exists());
    }

    #[test]
    fn json_store_writes_plain_array() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("items.json");
        let store = JsonFileStore::new(&path);

        store.save(&[record("Ünïcode")]).expect("save");

        let raw = fs::read_to_string(&path).expect("read");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        let array = value.as_array().expect("array");
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["name"], "Ünïcode");
        assert_eq!(array[0]["desc"], "Ünïcode description");
        assert!(array[0].get("version").is_none());
    }

    #[test]
    fn json_store_reports_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("missing").join("data.json"));

        let error = store.save(&[record("a")]).expect_err("save should fail");
        assert!(matches!(
            error,
            Error::StorageIo {
                action: StorageAction::Save,
                ..
            }
        ));
    }

    #[test]
    fn memory_store_can_fail() {
        let store = MemoryItemStore::new();
        store.save(&[record("a")]).expect("save");
        store.fail_saves("read-only");
        assert!(store.save(&[record("b")]).is_err());
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.last_saved(), Some(vec![record("a")]));
    }
}
