use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use git2::{Commit, Repository, Sort};
use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::HistoryPort;

/// Last-changed timestamps from the commit history of the enclosing repository.
///
/// History is indexed once on open: commits are walked from `HEAD`, newest
/// first, and each is diffed against its first parent. The first commit seen
/// touching a path is its most recent change.
#[derive(Debug, Clone)]
pub struct GitHistory {
    /// Site root relative to the repository workdir, `/`-terminated or empty.
    prefix: String,
    changed: HashMap<String, DateTime<Utc>>,
}

fn git_error(command: &str) -> impl Fn(git2::Error) -> AppError + '_ {
    move |e| AppError::GitError { command: command.to_string(), details: e.message().to_string() }
}

impl GitHistory {
    /// Open the repository containing `site_root` and index its history.
    pub fn open(site_root: &Path) -> Result<Self, AppError> {
        let repo = Repository::discover(site_root).map_err(git_error("git2::Repository::discover"))?;
        let prefix = site_prefix(&repo, site_root)?;
        let changed = index_history(&repo)?;
        debug!("Indexed history for {} paths", changed.len());
        Ok(Self { prefix, changed })
    }
}

fn site_prefix(repo: &Repository, site_root: &Path) -> Result<String, AppError> {
    let workdir = repo.workdir().ok_or_else(|| AppError::GitError {
        command: "git2::Repository::workdir".to_string(),
        details: "bare repository has no working tree".to_string(),
    })?;

    let workdir = fs::canonicalize(workdir)?;
    let site_root = fs::canonicalize(site_root)?;
    let relative = site_root.strip_prefix(&workdir).map_err(|_| AppError::GitError {
        command: "git2::Repository::discover".to_string(),
        details: format!("{} is outside {}", site_root.display(), workdir.display()),
    })?;

    let mut prefix = String::new();
    for component in relative.components() {
        prefix.push_str(&component.as_os_str().to_string_lossy());
        prefix.push('/');
    }
    Ok(prefix)
}

fn commit_time(commit: &Commit<'_>) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(commit.time().seconds(), 0)
}

fn index_history(repo: &Repository) -> Result<HashMap<String, DateTime<Utc>>, AppError> {
    let mut changed = HashMap::new();

    let mut walk = repo.revwalk().map_err(git_error("git2::Repository::revwalk"))?;
    if let Err(e) = walk.push_head() {
        debug!("No commits to index: {}", e.message());
        return Ok(changed);
    }
    walk.set_sorting(Sort::TIME).map_err(git_error("git2::Revwalk::set_sorting"))?;

    for oid in walk {
        let oid = match oid {
            Ok(oid) => oid,
            Err(e) => {
                // Shallow clones end the walk at the graft point.
                warn!("History walk stopped early: {}", e.message());
                break;
            }
        };
        let commit = repo.find_commit(oid).map_err(git_error("git2::Repository::find_commit"))?;
        let Some(when) = commit_time(&commit) else {
            continue;
        };

        let tree = commit.tree().map_err(git_error("git2::Commit::tree"))?;
        let parent_tree = commit.parent(0).ok().and_then(|parent| parent.tree().ok());
        let diff = repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)
            .map_err(git_error("git2::Repository::diff_tree_to_tree"))?;

        for delta in diff.deltas() {
            if let Some(path) = delta.new_file().path().and_then(|p| p.to_str()) {
                changed.entry(path.to_string()).or_insert(when);
            }
        }
    }

    Ok(changed)
}

impl HistoryPort for GitHistory {
    fn last_changed(&self, relative_path: &str) -> Result<Option<DateTime<Utc>>, AppError> {
        let key = format!("{}{}", self.prefix, relative_path);
        Ok(self.changed.get(&key).copied())
    }
}
