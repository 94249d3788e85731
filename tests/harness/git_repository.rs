use std::path::Path;

fn git(repo_dir: &Path, args: &[&str], date: &str) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .output()
        .unwrap_or_else(|e| panic!("git {:?} failed to start: {}", args, e));
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

pub(crate) fn init_repo(repo_dir: &Path) {
    git(repo_dir, &["init", "--initial-branch=main"], "2020-01-01T00:00:00Z");
    git(repo_dir, &["config", "user.email", "test@example.com"], "2020-01-01T00:00:00Z");
    git(repo_dir, &["config", "user.name", "Test User"], "2020-01-01T00:00:00Z");
}

/// Stage everything and commit with a fixed author/committer date.
pub(crate) fn commit_all(repo_dir: &Path, message: &str, date: &str) {
    git(repo_dir, &["add", "."], date);
    git(repo_dir, &["commit", "-m", message], date);
}
