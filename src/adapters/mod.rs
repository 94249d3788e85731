pub mod git_history;
pub mod mtime_history;
pub mod no_history;
pub mod site_filesystem;

pub use git_history::GitHistory;
pub use mtime_history::MtimeHistory;
pub use no_history::NoHistory;
pub use site_filesystem::FilesystemSiteTree;
