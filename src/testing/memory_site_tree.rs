//! Test double for `SiteTree`.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::{AppError, ExclusionPolicy};
use crate::ports::SiteTree;

/// In-memory site: page paths plus a map of written artifacts.
#[derive(Debug, Default)]
pub struct MemorySiteTree {
    pages: Vec<String>,
    pub artifacts: Mutex<BTreeMap<String, String>>,
    /// Artifact name whose write fails, for all-or-nothing checks.
    pub fail_write: Option<String>,
}

impl MemorySiteTree {
    pub fn new(pages: &[&str]) -> Self {
        Self { pages: pages.iter().map(|p| p.to_string()).collect(), ..Default::default() }
    }

    pub fn with_artifact(self, name: &str, content: &str) -> Self {
        self.artifacts.lock().unwrap().insert(name.to_string(), content.to_string());
        self
    }

    pub fn artifact(&self, name: &str) -> Option<String> {
        self.artifacts.lock().unwrap().get(name).cloned()
    }
}

impl SiteTree for MemorySiteTree {
    fn discover_pages(&self, policy: &ExclusionPolicy) -> Result<Vec<String>, AppError> {
        let mut pages: Vec<String> = self
            .pages
            .iter()
            .filter(|p| p.to_ascii_lowercase().ends_with(".html") && !policy.excludes(p))
            .cloned()
            .collect();
        pages.sort();
        pages.dedup();
        Ok(pages)
    }

    fn read_artifact(&self, name: &str) -> Result<Option<String>, AppError> {
        Ok(self.artifact(name))
    }

    fn write_artifact(&self, name: &str, content: &str) -> Result<(), AppError> {
        if self.fail_write.as_deref() == Some(name) {
            return Err(AppError::WriteFailed {
                path: name.to_string(),
                details: "simulated failure".to_string(),
            });
        }
        self.artifacts.lock().unwrap().insert(name.to_string(), content.to_string());
        Ok(())
    }
}
