pub mod canonical;
pub mod configuration;
pub mod error;
pub mod exclusion;
pub mod page;
pub mod robots;
pub mod sitemap;

pub use canonical::{BaseUrl, canonicalize, canonicalize_all};
pub use configuration::{LastmodPrecision, LastmodSource, SiteConfig};
pub use error::AppError;
pub use exclusion::ExclusionPolicy;
pub use page::{Page, format_lastmod};
pub use robots::{ROBOTS_FILE, RobotsPolicy};
pub use sitemap::{SITEMAP_FILE, SitemapDocument, SitemapEntry};
