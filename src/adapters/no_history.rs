use chrono::{DateTime, Utc};

use crate::domain::AppError;
use crate::ports::HistoryPort;

/// Stand-in when no history source could be opened; every lookup is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistoryPort for NoHistory {
    fn last_changed(&self, _relative_path: &str) -> Result<Option<DateTime<Utc>>, AppError> {
        Ok(None)
    }
}
