//! Shared testing harness for `sitegen` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// Testing harness providing an isolated site tree for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    site_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty site directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let site_dir = root.path().join("site");
        fs::create_dir_all(&site_dir).expect("Failed to create test site directory");
        Self { root, site_dir }
    }

    /// Directory holding the emulated site.
    pub(crate) fn site_dir(&self) -> &Path {
        &self.site_dir
    }

    /// Build a command for invoking the compiled `sitegen` binary inside the site.
    ///
    /// `BASE_URL` is cleared so the host environment cannot leak into runs.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("sitegen").expect("Failed to locate sitegen binary");
        cmd.current_dir(&self.site_dir).env_remove("BASE_URL");
        cmd
    }

    /// Write a file relative to the site root, creating parent directories.
    pub(crate) fn write(&self, relative: &str, content: &str) {
        let path = self.site_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write site file");
    }

    /// Write a minimal HTML page.
    pub(crate) fn page(&self, relative: &str) {
        self.write(relative, "<!doctype html><html><head><title>t</title></head></html>");
    }

    /// Pin a file's modification time to `secs` after the Unix epoch.
    pub(crate) fn set_mtime(&self, relative: &str, secs: u64) {
        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(secs);
        fs::File::options()
            .write(true)
            .open(self.site_dir.join(relative))
            .expect("Failed to open site file")
            .set_modified(stamp)
            .expect("Failed to set mtime");
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.site_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub(crate) fn exists(&self, relative: &str) -> bool {
        self.site_dir.join(relative).exists()
    }

    pub(crate) fn sitemap(&self) -> String {
        self.read("sitemap.xml")
    }

    pub(crate) fn robots(&self) -> String {
        self.read("robots.txt")
    }

    /// `<loc>` values in document order.
    pub(crate) fn sitemap_locs(&self) -> Vec<String> {
        self.sitemap()
            .lines()
            .filter_map(|line| {
                line.trim().strip_prefix("<loc>").and_then(|l| l.strip_suffix("</loc>"))
            })
            .map(str::to_string)
            .collect()
    }
}
