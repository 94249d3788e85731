//! Generator configuration loaded from `sitegen.toml`.

use serde::Deserialize;

use crate::domain::canonical::BaseUrl;
use crate::domain::configuration::{LastmodPrecision, LastmodSource};
use crate::domain::exclusion::ExclusionPolicy;
use crate::domain::AppError;

/// Built-in base URL used when neither the config file nor the environment sets one.
pub const DEFAULT_BASE_URL: &str = "https://saudenaturalglobal.com.br";

/// Configuration file name looked up in the site root.
pub const CONFIG_FILE: &str = "sitegen.toml";

/// Full generator configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub exclude: ExclusionPolicy,
    #[serde(default)]
    pub robots: RobotsConfig,
    #[serde(default)]
    pub lastmod: LastmodConfig,
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.site.validate()?;
        self.robots.validate()?;
        Ok(())
    }

    /// Parsed base URL. Call after `validate` to rely on it succeeding.
    pub fn base_url(&self) -> Result<BaseUrl, AppError> {
        BaseUrl::parse(&self.site.base_url)
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<SiteConfig, AppError> {
    let config: SiteConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Site identity and URL layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Absolute base URL, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Directory default document collapsed out of URLs.
    #[serde(default = "default_entry_point")]
    pub entry_point: String,
    /// Add a home entry when no page maps to the base URL.
    #[serde(default = "default_true")]
    pub include_home: bool,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            entry_point: default_entry_point(),
            include_home: default_true(),
        }
    }
}

impl SiteSection {
    pub fn validate(&self) -> Result<(), AppError> {
        BaseUrl::parse(&self.base_url)?;
        if self.entry_point.trim().is_empty() {
            return Err(AppError::InvalidConfig("entry_point must not be empty".to_string()));
        }
        if self.entry_point.contains('/') {
            return Err(AppError::InvalidConfig(format!(
                "entry_point must be a file name, got '{}'",
                self.entry_point
            )));
        }
        Ok(())
    }
}

/// Crawl directives owned by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RobotsConfig {
    /// Internal path prefixes that crawlers must not visit.
    #[serde(default = "default_disallow")]
    pub disallow: Vec<String>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self { disallow: default_disallow() }
    }
}

impl RobotsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for prefix in &self.disallow {
            if !prefix.starts_with('/') {
                return Err(AppError::InvalidConfig(format!(
                    "robots.disallow entries must start with '/', got '{}'",
                    prefix
                )));
            }
        }
        Ok(())
    }
}

/// Last-modified resolution settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LastmodConfig {
    #[serde(default)]
    pub source: LastmodSource,
    #[serde(default)]
    pub precision: LastmodPrecision,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_entry_point() -> String {
    "index.html".to_string()
}

fn default_disallow() -> Vec<String> {
    ["/content_pipeline/", "/seo_audit/", "/analytics_report/", "/scripts/", "/.github/"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_true() -> bool {
    true
}
