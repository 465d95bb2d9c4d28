//! Snapshot Store
//!
//! Persists snapshots to the stats directory:
//! - `trends.json` - always the latest snapshot, replaced atomically
//! - `trends-{YYYY-MM-DD}.json` - dated archive, written once per day
//! - `sample-trends.json` - snapshot computed from synthetic data

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::NamedTempFile;
use tracing::{info, instrument};

use trends_core::{MetricsSnapshot, TrendsError, TrendsResult};

/// File name of the latest snapshot
pub const LATEST_FILE: &str = "trends.json";

/// File name of the sample snapshot
pub const SAMPLE_FILE: &str = "sample-trends.json";

/// Paths written by [`SnapshotStore::save`]
#[derive(Debug, Clone)]
pub struct SavedSnapshot {
    pub latest: PathBuf,
    /// `None` when the archive for that day already existed
    pub archive: Option<PathBuf>,
}

/// File-based storage for metrics snapshots
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    stats_dir: PathBuf,
}

impl SnapshotStore {
    /// Create a store rooted at `stats_dir`
    pub fn new(stats_dir: impl Into<PathBuf>) -> Self {
        Self {
            stats_dir: stats_dir.into(),
        }
    }

    pub fn stats_dir(&self) -> &Path {
        &self.stats_dir
    }

    pub fn latest_path(&self) -> PathBuf {
        self.stats_dir.join(LATEST_FILE)
    }

    pub fn archive_path(&self, date: NaiveDate) -> PathBuf {
        self.stats_dir
            .join(format!("trends-{}.json", date.format("%Y-%m-%d")))
    }

    pub fn sample_path(&self) -> PathBuf {
        self.stats_dir.join(SAMPLE_FILE)
    }

    /// Save a snapshot as the latest and archive it under its reference date
    ///
    /// An existing archive for the same day is left untouched.
    #[instrument(skip(self, snapshot), fields(date = %snapshot.reference_date))]
    pub fn save(&self, snapshot: &MetricsSnapshot) -> TrendsResult<SavedSnapshot> {
        self.ensure_dir()?;
        let body = snapshot.to_json_pretty()?;

        let latest = self.latest_path();
        self.write_atomic(&latest, body.as_bytes(), true)?;
        info!("Saved trends to {}", latest.display());

        let archive_path = self.archive_path(snapshot.reference_date);
        let archive = if self.write_atomic(&archive_path, body.as_bytes(), false)? {
            info!("Saved archived trends to {}", archive_path.display());
            Some(archive_path)
        } else {
            info!(
                "Archive {} already exists, leaving it untouched",
                archive_path.display()
            );
            None
        };

        Ok(SavedSnapshot { latest, archive })
    }

    /// Save a snapshot computed from synthetic data
    #[instrument(skip(self, snapshot))]
    pub fn save_sample(&self, snapshot: &MetricsSnapshot) -> TrendsResult<PathBuf> {
        self.ensure_dir()?;
        let path = self.sample_path();
        self.write_atomic(&path, snapshot.to_json_pretty()?.as_bytes(), true)?;
        info!("Generated sample data at {}", path.display());
        Ok(path)
    }

    /// Read back the latest snapshot
    pub fn load_latest(&self) -> TrendsResult<MetricsSnapshot> {
        let path = self.latest_path();
        let body = std::fs::read_to_string(&path).map_err(|e| TrendsError::io(&path, e))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn ensure_dir(&self) -> TrendsResult<()> {
        std::fs::create_dir_all(&self.stats_dir).map_err(|e| TrendsError::io(&self.stats_dir, e))
    }

    /// Write through a temp file in the same directory, then rename into place
    ///
    /// Returns `false` when `overwrite` is off and `path` already exists.
    fn write_atomic(&self, path: &Path, body: &[u8], overwrite: bool) -> TrendsResult<bool> {
        let mut tmp =
            NamedTempFile::new_in(&self.stats_dir).map_err(|e| TrendsError::io(&self.stats_dir, e))?;
        tmp.write_all(body).map_err(|e| TrendsError::io(tmp.path(), e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| TrendsError::io(tmp.path(), e))?;

        let persisted = if overwrite {
            tmp.persist(path).map(|_| ())
        } else {
            tmp.persist_noclobber(path).map(|_| ())
        };

        match persisted {
            Ok(()) => Ok(true),
            Err(e) if !overwrite && e.error.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(TrendsError::io(path, e.error)),
        }
    }
}
