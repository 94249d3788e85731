use serde::Deserialize;

/// Where a page's last-modified timestamp comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LastmodSource {
    /// Filesystem modification time.
    #[default]
    Mtime,
    /// Most recent commit touching the path.
    Git,
}

impl LastmodSource {
    pub fn label(self) -> &'static str {
        match self {
            LastmodSource::Mtime => "mtime",
            LastmodSource::Git => "git",
        }
    }
}

/// How much of the timestamp is written to `<lastmod>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LastmodPrecision {
    /// `YYYY-MM-DD`
    #[default]
    Date,
    /// `YYYY-MM-DDTHH:MM:SS+00:00`
    Timestamp,
}
