//! Sitemap document assembly and XML serialization.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use quick_xml::escape::escape;

use crate::domain::canonical::BaseUrl;
use crate::domain::configuration::LastmodPrecision;
use crate::domain::page::{Page, format_lastmod};

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Output file name, relative to the site root.
pub const SITEMAP_FILE: &str = "sitemap.xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
}

/// Ordered `(loc, lastmod)` entries with unique locations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapDocument {
    entries: Vec<SitemapEntry>,
}

impl SitemapDocument {
    /// Build the document from pages already sorted in discovery order.
    ///
    /// With `home_lastmod` set, a home entry is prepended unless a page already
    /// maps to the base URL.
    pub fn from_pages(
        pages: &[Page],
        base: &BaseUrl,
        home_lastmod: Option<DateTime<Utc>>,
        precision: LastmodPrecision,
    ) -> Self {
        let home = base.home();
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(pages.len() + 1);

        if let Some(timestamp) = home_lastmod
            && !pages.iter().any(|page| page.url == home)
        {
            seen.insert(home.clone());
            entries.push(SitemapEntry { loc: home, lastmod: format_lastmod(timestamp, precision) });
        }

        for page in pages {
            if !seen.insert(page.url.clone()) {
                continue;
            }
            entries.push(SitemapEntry {
                loc: page.url.clone(),
                lastmod: format_lastmod(page.last_modified, precision),
            });
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize with fixed two-space indentation and a trailing newline.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NAMESPACE));
        for entry in &self.entries {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape(entry.loc.as_str())));
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", escape(entry.lastmod.as_str())));
            xml.push_str("  </url>\n");
        }
        xml.push_str("</urlset>\n");
        xml
    }
}
