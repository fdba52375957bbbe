use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Key-value string storage used for everything the app persists.
///
/// The movie snapshot and the language preference are opaque string values
/// under fixed keys; implementations only move blobs and never interpret
/// them.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct StoreData {
    #[serde(flatten)]
    data: HashMap<String, String>,
}

/// TOML-file-backed store. Every `set` writes through to disk.
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, reading any existing entries.
    ///
    /// A missing file yields an empty store. A file that no longer parses
    /// as TOML is treated as lost: a warning is logged and the store starts
    /// empty. Only I/O failures propagate.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            match toml::from_str::<StoreData>(&content) {
                Ok(data) => data.data,
                Err(e) => {
                    warn!(
                        "Store file {} is corrupt ({}); starting empty",
                        path.display(),
                        e
                    );
                    HashMap::new()
                }
            }
        } else {
            debug!("Store file {} does not exist yet", path.display());
            HashMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&StoreData {
            data: self.entries.clone(),
        })?;
        // Write to a temp file and rename so a failed write cannot truncate
        // the previous store contents.
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, &self.path)?;
        debug!(
            "Saved store file {} ({} entries)",
            self.path.display(),
            self.entries.len()
        );
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// HashMap-backed store for tests and embedding.
///
/// Clones share the same underlying map, so a handle kept on the side
/// observes everything written through the store it was cloned from.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
