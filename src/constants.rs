//! Constants used throughout the template loader

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["loader.json", "loader.yaml", "loader.yml"];

/// Default prefix prepended to every template name
pub const DEFAULT_PREFIX: &str = "/";

/// Default template file suffix
pub const DEFAULT_SUFFIX: &str = ".hbs";

/// Default character encoding label
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Default timeout for remote template requests, in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// URL schemes handled by the URL reader
pub const URL_SCHEMES: &[&str] = &["http", "https", "file"];

/// HTTP statuses treated as a missing template rather than a failure
pub const ABSENT_HTTP_STATUSES: &[u16] = &[404, 410];
