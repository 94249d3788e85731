use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::domain::AppError;
use crate::ports::HistoryPort;

/// Last-changed timestamps taken from filesystem modification times.
#[derive(Debug, Clone)]
pub struct MtimeHistory {
    root: PathBuf,
}

impl MtimeHistory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl HistoryPort for MtimeHistory {
    fn last_changed(&self, relative_path: &str) -> Result<Option<DateTime<Utc>>, AppError> {
        let modified = fs::metadata(self.root.join(relative_path))?.modified()?;
        Ok(Some(DateTime::<Utc>::from(modified)))
    }
}
