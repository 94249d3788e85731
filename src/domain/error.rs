use std::io;

use thiserror::Error;

/// Library-wide error type for sitegen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Site root directory does not exist.
    #[error("Site root not found: {0}")]
    RootNotFound(String),

    /// Site root exists but cannot be listed.
    #[error("Site root '{path}' is not readable: {details}")]
    RootUnreadable { path: String, details: String },

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration value failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Base URL is not an absolute http(s) URL.
    #[error("Invalid base URL '{url}': {details}")]
    InvalidBaseUrl { url: String, details: String },

    /// Two distinct pages resolved to the same canonical URL.
    #[error("Canonical URL collision: '{first}' and '{second}' both map to {url}")]
    UrlCollision { url: String, first: String, second: String },

    /// An output artifact could not be written.
    #[error("Failed to write {path}: {details}")]
    WriteFailed { path: String, details: String },

    /// Git history lookup failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::RootNotFound(_) | AppError::ConfigNotFound(_) => io::ErrorKind::NotFound,
            AppError::RootUnreadable { .. } => io::ErrorKind::PermissionDenied,
            AppError::InvalidConfig(_)
            | AppError::InvalidBaseUrl { .. }
            | AppError::UrlCollision { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::WriteFailed { .. } | AppError::GitError { .. } => io::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collision_message_names_both_paths() {
        let err = AppError::UrlCollision {
            url: "https://example.com/a%20b.html".to_string(),
            first: "a b.html".to_string(),
            second: "a%20b.html".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("'a b.html'"));
        assert!(message.contains("'a%20b.html'"));
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn missing_root_maps_to_not_found() {
        let err = AppError::RootNotFound("/nope".to_string());
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Site root not found: /nope");
    }
}
