mod history;
mod site_tree;

pub use history::HistoryPort;
pub use site_tree::SiteTree;
