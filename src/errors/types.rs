//! Error type definitions for the channel catalog tools

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::utils::url::UrlUtils;

/// Top-level application error type
///
/// All of these are fatal for the generator and the README refresher. The
/// validator only raises them while collecting URLs, before any check runs.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required data, template or target document is missing
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Structured data failed to parse into the expected shape
    #[error("Parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An external command-line tool failed or could not be started
    #[error("External tool error: {tool} - {message}")]
    ExternalTool { tool: String, message: String },

    /// Filesystem failures other than a missing input
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Failure of a single HEAD or GET request against a stream URL
///
/// These never escape the validator loop; they are mapped to status `0`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The request did not complete within the configured timeout
    #[error("Connection timeout: {url}")]
    Timeout { url: String },

    /// The URL could not be turned into a request
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Connection refused, DNS, TLS, redirect loops and the like
    #[error("Request failed: {url} - {message}")]
    Request { url: String, message: String },
}

impl AppError {
    /// Map an I/O error on `path`, turning `NotFound` into [`AppError::FileNotFound`]
    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Create a parse error for the data file at `path`
    pub fn parse<P: AsRef<Path>>(path: P, source: serde_yaml::Error) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an external tool error
    pub fn external_tool<T: Into<String>, M: Into<String>>(tool: T, message: M) -> Self {
        Self::ExternalTool {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl ProbeError {
    /// Classify a reqwest failure, keeping credentials out of the message
    pub fn from_reqwest(url: &str, err: &reqwest::Error) -> Self {
        let url = UrlUtils::obfuscate_credentials(url);
        if err.is_timeout() {
            Self::Timeout { url }
        } else if err.is_builder() {
            Self::InvalidUrl { url }
        } else {
            Self::Request {
                url,
                message: UrlUtils::obfuscate_credentials(&err.to_string()),
            }
        }
    }
}
