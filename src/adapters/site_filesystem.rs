use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{AppError, ExclusionPolicy};
use crate::ports::SiteTree;

/// Site tree backed by a local directory.
#[derive(Debug, Clone)]
pub struct FilesystemSiteTree {
    root: PathBuf,
}

impl FilesystemSiteTree {
    /// Open a site root, failing if it is not an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AppError::RootNotFound(root.display().to_string()));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn artifact_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

fn is_html(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

fn join_relative(prefix: &str, name: &str) -> String {
    if prefix.is_empty() { name.to_string() } else { format!("{}/{}", prefix, name) }
}

impl SiteTree for FilesystemSiteTree {
    fn discover_pages(&self, policy: &ExclusionPolicy) -> Result<Vec<String>, AppError> {
        let root_entries = fs::read_dir(&self.root).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                AppError::RootNotFound(self.root.display().to_string())
            } else {
                AppError::RootUnreadable {
                    path: self.root.display().to_string(),
                    details: e.to_string(),
                }
            }
        })?;

        let mut pages = Vec::new();
        let mut pending = vec![(String::new(), root_entries)];

        while let Some((prefix, entries)) = pending.pop() {
            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!("Skipping unreadable entry under '{}': {}", prefix, e);
                        continue;
                    }
                };

                let path = entry.path();
                let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                    warn!("Skipping non UTF-8 path {}", path.display());
                    continue;
                };

                let file_type = match entry.file_type() {
                    Ok(file_type) => file_type,
                    Err(e) => {
                        warn!("Skipping {}: {}", path.display(), e);
                        continue;
                    }
                };

                let is_dir = if file_type.is_symlink() {
                    match fs::metadata(&path) {
                        Ok(meta) if meta.is_dir() => {
                            debug!("Not following directory symlink {}", path.display());
                            continue;
                        }
                        Ok(_) => false,
                        Err(e) => {
                            warn!("Skipping dangling symlink {}: {}", path.display(), e);
                            continue;
                        }
                    }
                } else {
                    file_type.is_dir()
                };

                let relative = join_relative(&prefix, &name);

                if is_dir {
                    if policy.excludes_dir(&name) {
                        debug!("Pruned excluded directory {}", relative);
                        continue;
                    }
                    match fs::read_dir(&path) {
                        Ok(children) => pending.push((relative, children)),
                        Err(e) => warn!("Skipping unreadable directory {}: {}", relative, e),
                    }
                    continue;
                }

                if !is_html(&name) {
                    continue;
                }
                if policy.excludes(&relative) {
                    debug!("Excluded {}", relative);
                    continue;
                }
                pages.push(relative);
            }
        }

        pages.sort();
        pages.dedup();
        Ok(pages)
    }

    fn read_artifact(&self, name: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.artifact_path(name)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    fn write_artifact(&self, name: &str, content: &str) -> Result<(), AppError> {
        let path = self.artifact_path(name);
        let tmp_path = self.root.join(format!(".{}.tmp", name));
        let write_failed = |e: io::Error| AppError::WriteFailed {
            path: path.display().to_string(),
            details: e.to_string(),
        };

        fs::write(&tmp_path, content).map_err(write_failed)?;

        #[cfg(target_os = "windows")]
        if path.exists() {
            fs::remove_file(&path).map_err(write_failed)?;
        }

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_failed(e));
        }

        debug!("Wrote {}", path.display());
        Ok(())
    }
}
