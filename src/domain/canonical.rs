//! Canonical URL mapping for discovered pages.

use std::collections::HashMap;
use std::fmt;

use url::Url;

use crate::domain::AppError;

/// Absolute http(s) base URL, stored without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let invalid = |details: &str| AppError::InvalidBaseUrl {
            url: raw.to_string(),
            details: details.to_string(),
        };

        let trimmed = raw.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if parsed.host_str().is_none() {
            return Err(invalid("missing host"));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("must not contain a query or fragment"));
        }

        Ok(Self(parsed.as_str().trim_end_matches('/').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The site home: the base followed by exactly one slash.
    pub fn home(&self) -> String {
        format!("{}/", self.0)
    }

    /// Join a site-relative path with exactly one separating slash.
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }

    pub fn sitemap_url(&self) -> String {
        self.join("sitemap.xml")
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Map one relative page path to its canonical absolute URL.
///
/// The root entry point becomes the home URL, a nested entry point becomes its
/// directory URL with a trailing slash, anything else is appended unchanged.
pub fn canonicalize(base: &BaseUrl, entry_point: &str, relative_path: &str) -> Result<String, AppError> {
    let suffix = if relative_path == entry_point {
        ""
    } else if let Some(dir) =
        relative_path.strip_suffix(entry_point).filter(|dir| dir.ends_with('/'))
    {
        dir
    } else {
        relative_path
    };

    // Reserved URL delimiters inside file names are escaped so they stay part of the path.
    let escaped = suffix.replace('#', "%23").replace('?', "%3F").replace('\\', "%5C");
    let escaped: Vec<String> = escaped.split('/').map(escape_dot_segment).collect();
    let joined = base.join(&escaped.join("/"));
    let url = Url::parse(&joined).map_err(|e| {
        AppError::config_error(format!("Page '{}' does not form a valid URL: {}", relative_path, e))
    })?;

    let url = url.to_string();
    if !url.starts_with(&base.home()) {
        return Err(AppError::config_error(format!(
            "Page '{}' resolves outside {} ({})",
            relative_path,
            base.home(),
            url
        )));
    }
    Ok(url)
}

/// Keep percent-encoded dot segments (`%2e`, `.%2E`, ...) literal.
///
/// URL parsing resolves them like `.` and `..`, which would move a page to a
/// different path.
fn escape_dot_segment(segment: &str) -> String {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    if segment.contains('%') && (decoded == "." || decoded == "..") {
        segment.replace('%', "%25")
    } else {
        segment.to_string()
    }
}

/// Canonicalize every path, failing on the first pair that maps to one URL.
///
/// Returns `(relative_path, url)` pairs in input order.
pub fn canonicalize_all(
    base: &BaseUrl,
    entry_point: &str,
    relative_paths: &[String],
) -> Result<Vec<(String, String)>, AppError> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(relative_paths.len());
    let mut mapped = Vec::with_capacity(relative_paths.len());

    for path in relative_paths {
        let url = canonicalize(base, entry_point, path)?;
        if let Some(first) = seen.get(&url) {
            if *first == path.as_str() {
                continue;
            }
            return Err(AppError::UrlCollision {
                url,
                first: first.to_string(),
                second: path.clone(),
            });
        }
        seen.insert(url.clone(), path.as_str());
        mapped.push((path.clone(), url));
    }

    Ok(mapped)
}
