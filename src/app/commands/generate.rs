//! Regenerate `sitemap.xml` and `robots.txt` for a site tree.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, Page, ROBOTS_FILE, RobotsPolicy, SITEMAP_FILE, SitemapDocument, canonicalize_all,
};
use crate::ports::{HistoryPort, SiteTree};

/// Result of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// `<url>` entries written, including a synthetic home entry.
    pub url_count: usize,
    /// Pages found by discovery.
    pub page_count: usize,
    /// Pages whose last-modified value fell back to the run timestamp.
    pub degraded: Vec<String>,
    /// Canonical URL of the written sitemap.
    pub sitemap_url: String,
}

/// Execute the generate command.
///
/// Both documents are built in memory before the first write, so fatal errors
/// leave existing outputs untouched.
pub fn execute<S, H>(ctx: &AppContext<S, H>, run_time: DateTime<Utc>) -> Result<GenerateOutcome, AppError>
where
    S: SiteTree,
    H: HistoryPort,
{
    let config = ctx.config();
    let base = config.base_url()?;

    let paths = ctx.site().discover_pages(&config.exclude)?;
    let mapped = canonicalize_all(&base, &config.site.entry_point, &paths)?;

    let mut degraded = Vec::new();
    let pages: Vec<Page> = mapped
        .into_iter()
        .map(|(relative_path, url)| {
            let last_modified = match ctx.history().last_changed(&relative_path) {
                Ok(Some(timestamp)) => timestamp,
                Ok(None) => {
                    warn!("No history for {}; using run timestamp", relative_path);
                    degraded.push(relative_path.clone());
                    run_time
                }
                Err(e) => {
                    warn!("Last-modified lookup failed for {}: {}; using run timestamp", relative_path, e);
                    degraded.push(relative_path.clone());
                    run_time
                }
            };
            Page { relative_path, url, last_modified }
        })
        .collect();

    let newest = pages.iter().map(|page| page.last_modified).max().unwrap_or(run_time);
    let home_lastmod = config.site.include_home.then_some(newest);
    let sitemap = SitemapDocument::from_pages(&pages, &base, home_lastmod, config.lastmod.precision);

    let previous_robots = ctx.site().read_artifact(ROBOTS_FILE)?;
    let policy = RobotsPolicy::new(&base, &config.robots.disallow);
    if let Some(previous) = previous_robots.as_deref() {
        for line in policy.regrouped_directives(previous) {
            warn!(
                "{} line '{}' was under 'User-agent: *' and now joins the preceding group",
                ROBOTS_FILE, line
            );
        }
    }
    let robots = policy.merge(previous_robots.as_deref());

    ctx.site().write_artifact(SITEMAP_FILE, &sitemap.to_xml())?;
    ctx.site().write_artifact(ROBOTS_FILE, &robots)?;

    info!(
        pages = pages.len(),
        urls = sitemap.len(),
        degraded = degraded.len(),
        "Generated sitemap for {}",
        base
    );

    Ok(GenerateOutcome {
        url_count: sitemap.len(),
        page_count: pages.len(),
        degraded,
        sitemap_url: base.sitemap_url(),
    })
}
