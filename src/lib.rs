//! sitegen: regenerate sitemap.xml and robots.txt for a static site tree.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, warn};

use adapters::{FilesystemSiteTree, GitHistory, MtimeHistory, NoHistory};
use app::{
    AppContext,
    commands::generate,
    config::{ConfigOverrides, load_config},
};
use domain::LastmodSource;
use ports::HistoryPort;

pub use app::commands::generate::GenerateOutcome;
pub use domain::{AppError, ROBOTS_FILE, SITEMAP_FILE};

/// Inputs for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Site root; scanned for pages and receives both outputs.
    pub root: PathBuf,
    pub overrides: ConfigOverrides,
}

/// Regenerate `sitemap.xml` and `robots.txt` under `options.root`.
pub fn generate(options: GenerateOptions) -> Result<GenerateOutcome, AppError> {
    let site = FilesystemSiteTree::open(&options.root)?;
    let config = load_config(site.root(), &options.overrides)?;

    debug!("Last-modified source: {}", config.lastmod.source.label());
    let history: Box<dyn HistoryPort> = match config.lastmod.source {
        LastmodSource::Mtime => Box::new(MtimeHistory::new(site.root())),
        LastmodSource::Git => match GitHistory::open(site.root()) {
            Ok(history) => Box::new(history),
            Err(e) => {
                warn!("Git history unavailable, using run timestamp for every page: {}", e);
                Box::new(NoHistory)
            }
        },
    };

    let ctx = AppContext::new(site, history, config);
    generate::execute(&ctx, Utc::now())
}
