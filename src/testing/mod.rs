mod fake_history;
mod memory_site_tree;

pub use fake_history::FakeHistory;
pub use memory_site_tree::MemorySiteTree;
