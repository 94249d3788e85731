use chrono::{DateTime, Utc};

use crate::domain::AppError;

/// Source of "last changed" timestamps for site pages.
pub trait HistoryPort {
    /// Timestamp of the most recent change to `relative_path`.
    ///
    /// `Ok(None)` means the source has no record of the path.
    fn last_changed(&self, relative_path: &str) -> Result<Option<DateTime<Utc>>, AppError>;
}

impl<H: HistoryPort + ?Sized> HistoryPort for Box<H> {
    fn last_changed(&self, relative_path: &str) -> Result<Option<DateTime<Utc>>, AppError> {
        (**self).last_changed(relative_path)
    }
}
