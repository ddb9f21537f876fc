use std::fmt;

/// Comprehensive error types for upwatch operations
#[derive(Debug)]
pub enum UpwatchError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client error (client construction, sheet fetching)
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON parsing error
    JsonParsing(serde_json::Error),

    /// Row source error (endpoint catalog, sheet export)
    Source(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for UpwatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpwatchError::Io(err) => write!(f, "IO error: {err}"),
            UpwatchError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UpwatchError::Http(err) => write!(f, "HTTP error: {err}"),
            UpwatchError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UpwatchError::JsonParsing(err) => write!(f, "JSON parsing error: {err}"),
            UpwatchError::Source(msg) => write!(f, "Source error: {msg}"),
            UpwatchError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for UpwatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpwatchError::Io(err) => Some(err),
            UpwatchError::Http(err) => Some(err),
            UpwatchError::TomlParsing(err) => Some(err),
            UpwatchError::JsonParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UpwatchError {
    fn from(err: std::io::Error) -> Self {
        UpwatchError::Io(err)
    }
}

impl From<reqwest::Error> for UpwatchError {
    fn from(err: reqwest::Error) -> Self {
        UpwatchError::Http(err)
    }
}

impl From<toml::de::Error> for UpwatchError {
    fn from(err: toml::de::Error) -> Self {
        UpwatchError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for UpwatchError {
    fn from(err: serde_json::Error) -> Self {
        UpwatchError::JsonParsing(err)
    }
}

/// Type alias for Results using UpwatchError
pub type Result<T> = std::result::Result<T, UpwatchError>;
