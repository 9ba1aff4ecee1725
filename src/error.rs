use thiserror::Error;

/// Coarse classification of an [`Error`].
///
/// Callers chaining several loaders only need to know whether a failure
/// means "try the next store" or "stop".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The resource does not exist at the resolved path.
    NotFound,
    /// The store was reachable but reading or decoding failed.
    Io,
    /// The loader or one of its readers was built with invalid settings.
    Configuration,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Template '{name}' not found at '{path}'.")]
    NotFound { name: String, path: String },

    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Cannot decode '{path}' as {encoding}.")]
    DecodeError { path: String, encoding: String },

    #[error("Path '{path}' escapes the template root.")]
    PathTraversalError { path: String },

    #[error("Failed to fetch template. Original error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Request for '{url}' failed with status {status}.")]
    HttpStatusError { url: String, status: u16 },

    #[error("Cannot build a URL for '{path}': {reason}.")]
    InvalidTemplateUrlError { path: String, reason: String },

    #[error("Invalid URL. Original error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Unknown character encoding '{0}'.")]
    UnknownEncodingError(String),

    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Failed to parse JSON config. Original error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML config. Original error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    #[error("No configuration file found in '{config_dir}'. Tried: {config_files}.")]
    ConfigNotFound { config_dir: String, config_files: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Classifies the error.
    ///
    /// `NotFound` is the only recoverable outcome; everything raised while
    /// talking to a reachable store is `Io`, and everything raised while
    /// building a loader is `Configuration`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::IoError(_)
            | Error::DecodeError { .. }
            | Error::PathTraversalError { .. }
            | Error::HttpError(_)
            | Error::HttpStatusError { .. }
            | Error::InvalidTemplateUrlError { .. }
            | Error::Other(_) => ErrorKind::Io,
            Error::UrlParseError(_)
            | Error::UnknownEncodingError(_)
            | Error::ConfigError(_)
            | Error::JsonParseError(_)
            | Error::YamlParseError(_)
            | Error::ConfigNotFound { .. } => ErrorKind::Configuration,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Convenience type alias for Results with the crate error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;
