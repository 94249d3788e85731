use crate::domain::SiteConfig;
use crate::ports::{HistoryPort, SiteTree};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: SiteTree, H: HistoryPort> {
    site: S,
    history: H,
    config: SiteConfig,
}

impl<S: SiteTree, H: HistoryPort> AppContext<S, H> {
    /// Create a new application context.
    pub fn new(site: S, history: H, config: SiteConfig) -> Self {
        Self { site, history, config }
    }

    /// Get a reference to the site tree.
    pub fn site(&self) -> &S {
        &self.site
    }

    /// Get a reference to the last-modified source.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Get the resolved configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}
