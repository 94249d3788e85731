//! Site tree access: page discovery and output artifact I/O.
//!
//! All paths crossing this port are POSIX-style and relative to the site root.

use crate::domain::{AppError, ExclusionPolicy};

/// Port for the local tree of built HTML files.
pub trait SiteTree {
    /// List every `.html` file not excluded by `policy`, deduplicated and
    /// sorted lexicographically by relative path.
    ///
    /// Fails only when the root itself is missing or unreadable; entries that
    /// cannot be read are skipped.
    fn discover_pages(&self, policy: &ExclusionPolicy) -> Result<Vec<String>, AppError>;

    /// Read an output artifact. Returns `None` when it does not exist yet.
    fn read_artifact(&self, name: &str) -> Result<Option<String>, AppError>;

    /// Replace an output artifact in a single step.
    fn write_artifact(&self, name: &str, content: &str) -> Result<(), AppError>;
}
