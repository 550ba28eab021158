use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the file every saved drawer count is appended to.
const SNAPSHOT_FILE: &str = "saved_counts.json";

/// Resolves and owns the data directory for persisted drawer counts.
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_dir: PathBuf,
}

impl JsonConnection {
    /// Connect to the platform data directory, creating it if needed.
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from("com", "cashdrawer", "cash-drawer-counter")
            .context("could not determine a platform data directory")?;
        Self::with_base_dir(project_dirs.data_dir())
    }

    /// Use an explicit directory; tests point this at a temp dir.
    pub fn with_base_dir(base_dir: &Path) -> Result<Self> {
        fs::create_dir_all(base_dir)
            .with_context(|| format!("creating data directory {}", base_dir.display()))?;
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
        })
    }

    pub fn snapshot_file_path(&self) -> PathBuf {
        self.base_dir.join(SNAPSHOT_FILE)
    }
}
