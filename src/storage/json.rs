use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::MovieSchedule;
use crate::storage::ScheduleSink;

/// Writes the run's schedules as one pretty-printed JSON document.
/// serde_json emits UTF-8 as-is, so Japanese titles stay readable in the
/// file.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    /// Date-stamped file under `dir`, e.g. data/movie_schedules_20260829.json
    pub fn dated(dir: impl AsRef<Path>) -> Self {
        let filename = format!("movie_schedules_{}.json", Local::now().format("%Y%m%d"));
        Self {
            path: dir.as_ref().join(filename),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ScheduleSink for JsonFileSink {
    async fn write(&self, schedules: &[MovieSchedule]) -> Result<PathBuf> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let body = serde_json::to_string_pretty(schedules)?;
        tokio::fs::write(&self.path, body)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        info!("Results saved to {}", self.path.display());
        Ok(self.path.clone())
    }
}
