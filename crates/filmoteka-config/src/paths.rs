use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("filmoteka");
        Ok(Self::from_base(base))
    }

    /// Build all paths under an explicit base directory.
    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The key-value store file holding the movie library and preferences.
    pub fn store_file(&self) -> PathBuf {
        self.data_dir.join("store.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        // FILMOTEKA_HOME pins everything under one directory (portable
        // installs, tests); otherwise use the platform config directory.
        if let Ok(base) = std::env::var("FILMOTEKA_HOME") {
            return Self::from_base(base);
        }
        Self::new().unwrap_or_else(|_| Self::from_base("."))
    }
}
