use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::AppError;
use crate::ports::HistoryPort;

/// Scripted history: known timestamps, failing paths, everything else unavailable.
#[derive(Debug, Default)]
pub struct FakeHistory {
    pub known: HashMap<String, DateTime<Utc>>,
    pub failing: Vec<String>,
}

impl FakeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, timestamp: DateTime<Utc>) -> Self {
        self.known.insert(path.to_string(), timestamp);
        self
    }

    pub fn failing(mut self, path: &str) -> Self {
        self.failing.push(path.to_string());
        self
    }
}

impl HistoryPort for FakeHistory {
    fn last_changed(&self, relative_path: &str) -> Result<Option<DateTime<Utc>>, AppError> {
        if self.failing.iter().any(|p| p == relative_path) {
            return Err(AppError::GitError {
                command: "fake".to_string(),
                details: format!("lookup failed for {}", relative_path),
            });
        }
        Ok(self.known.get(relative_path).copied())
    }
}
