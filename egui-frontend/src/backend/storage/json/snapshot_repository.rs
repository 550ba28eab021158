//! JSON-file repository for saved drawer counts.
//!
//! The whole history is one JSON array in a single file: load, push, rewrite.
//! Append-only and unbounded; there is no dedup, no eviction, and no
//! read-back UI, so ordering is the only contract worth keeping.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io::{BufReader, BufWriter};
use thiserror::Error;

use shared::DrawerSnapshot;

use super::JsonConnection;

#[derive(Debug, Error)]
pub enum SnapshotStoreError {
    #[error("saved counts file {path} is not valid JSON: {source}")]
    MalformedFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    connection: JsonConnection,
}

impl SnapshotRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Read every saved snapshot, oldest first. A missing file is an empty
    /// history, not an error.
    pub fn load_all(&self) -> Result<Vec<DrawerSnapshot>> {
        let path = self.connection.snapshot_file_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&path)
            .with_context(|| format!("opening saved counts file {}", path.display()))?;
        let snapshots = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            SnapshotStoreError::MalformedFile {
                path: path.display().to_string(),
                source,
            }
        })?;
        Ok(snapshots)
    }

    /// Append one snapshot and rewrite the file. Returns how many snapshots
    /// are on file afterwards.
    pub fn append(&self, snapshot: DrawerSnapshot) -> Result<usize> {
        let mut snapshots = self.load_all()?;
        snapshots.push(snapshot);

        let path = self.connection.snapshot_file_path();
        let file = fs::File::create(&path)
            .with_context(|| format!("writing saved counts file {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &snapshots)
            .with_context(|| format!("serializing saved counts to {}", path.display()))?;

        info!("Saved drawer count ({} on file)", snapshots.len());
        Ok(snapshots.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_repo() -> Result<(SnapshotRepository, tempfile::TempDir)> {
        let dir = tempfile::tempdir()?;
        let connection = JsonConnection::with_base_dir(dir.path())?;
        Ok((SnapshotRepository::new(connection), dir))
    }

    #[test]
    fn missing_file_is_empty_history() -> Result<()> {
        let (repo, _dir) = setup_test_repo()?;
        assert!(repo.load_all()?.is_empty());
        Ok(())
    }

    #[test]
    fn append_preserves_order_across_saves() -> Result<()> {
        let (repo, _dir) = setup_test_repo()?;

        let first = DrawerSnapshot::new(vec![10.0, 4.0], 0.50, 0.0, 0.0);
        let second = DrawerSnapshot::new(vec![0.0, 0.0], 300.0, 50.0, 250.0);

        assert_eq!(repo.append(first.clone())?, 1);
        assert_eq!(repo.append(second.clone())?, 2);

        let history = repo.load_all()?;
        assert_eq!(history, vec![first, second]);
        Ok(())
    }

    #[test]
    fn malformed_file_surfaces_an_error() -> Result<()> {
        let (repo, dir) = setup_test_repo()?;
        fs::write(dir.path().join("saved_counts.json"), "not json")?;

        let err = repo.load_all().unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
        Ok(())
    }
}
