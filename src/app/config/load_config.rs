//! Generator configuration loading: file, environment, then CLI overrides.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::configuration::{CONFIG_FILE, parse_config_content};
use crate::domain::{AppError, LastmodSource, SiteConfig};

/// Environment variable overriding the configured base URL.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Values supplied on the command line, each overriding the loaded config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Explicit config file; must exist when set.
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub lastmod: Option<LastmodSource>,
}

/// Load configuration for a site root.
///
/// `<root>/sitegen.toml` is optional; an explicit `--config` path is not.
pub fn load_config(root: &Path, overrides: &ConfigOverrides) -> Result<SiteConfig, AppError> {
    let content = match &overrides.config_path {
        Some(path) => Some(fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                AppError::ConfigNotFound(path.display().to_string())
            } else {
                AppError::Io(e)
            }
        })?),
        None => match fs::read_to_string(root.join(CONFIG_FILE)) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(AppError::Io(e)),
        },
    };

    let env_base_url = std::env::var(BASE_URL_ENV).ok();
    resolve_config(content.as_deref(), env_base_url, overrides)
}

/// Merge file content, environment and CLI overrides, then validate.
pub fn resolve_config(
    content: Option<&str>,
    env_base_url: Option<String>,
    overrides: &ConfigOverrides,
) -> Result<SiteConfig, AppError> {
    let mut config = match content {
        Some(content) => {
            debug!("Loaded {}", CONFIG_FILE);
            parse_config_content(content)?
        }
        None => SiteConfig::default(),
    };

    if let Some(url) = env_base_url.filter(|url| !url.trim().is_empty()) {
        debug!("{} overrides base URL", BASE_URL_ENV);
        config.site.base_url = url;
    }
    if let Some(url) = &overrides.base_url {
        config.site.base_url = url.clone();
    }
    if let Some(source) = overrides.lastmod {
        config.lastmod.source = source;
    }

    config.validate()?;
    Ok(config)
}
