pub mod lastmod_mode;
pub mod site_config;

pub use lastmod_mode::{LastmodPrecision, LastmodSource};
pub use site_config::{
    CONFIG_FILE, DEFAULT_BASE_URL, LastmodConfig, RobotsConfig, SiteConfig, SiteSection,
    parse_config_content,
};
