use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

use crate::models::MovieSchedule;

mod json;
pub use json::JsonFileSink;

#[async_trait]
pub trait ScheduleSink: Send + Sync {
    /// Persist the captured schedules, returning where they landed.
    async fn write(&self, schedules: &[MovieSchedule]) -> Result<PathBuf>;
}
