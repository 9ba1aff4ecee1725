use crate::config::LoaderConfig;
use crate::constants::URL_SCHEMES;
use crate::error::Result;
use std::path::PathBuf;
use url::Url;

pub mod base;
pub mod composite;
pub mod interface;
pub mod minijinja;

pub use base::{
    ClassPathLoader, ContextLoader, FileLoader, Loader, LoaderBuilder, UrlLoader,
};
pub use composite::CompositeLoader;
pub use interface::TemplateLoader;

/// Where a source string points to.
#[derive(Debug, PartialEq)]
pub enum StoreLocation {
    /// Directory on the local filesystem
    FileSystem(PathBuf),
    /// HTTP(S) or `file://` base URL
    Url(String),
}

impl std::fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreLocation::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            StoreLocation::Url(url) => write!(f, "url: '{url}'"),
        }
    }
}

impl StoreLocation {
    /// Classifies a source string as a URL or a local directory.
    pub fn from_string(s: &str) -> Self {
        if Self::is_url(s) {
            StoreLocation::Url(s.to_string())
        } else {
            StoreLocation::FileSystem(PathBuf::from(s))
        }
    }

    /// Determines if a string is a URL the URL reader can fetch from.
    pub fn is_url(s: &str) -> bool {
        Url::parse(s).is_ok_and(|url| URL_SCHEMES.contains(&url.scheme()))
    }
}

/// Creates a loader for a source string, either a URL or a directory path.
///
/// # Arguments
/// * `s` - Base URL or template root directory
/// * `config` - Naming and decoding settings for the loader
///
/// # Returns
/// * `Result<Box<dyn TemplateLoader + Send + Sync>>` - Loader bound to the store
pub fn loader_for(
    s: &str,
    config: LoaderConfig,
) -> Result<Box<dyn TemplateLoader + Send + Sync>> {
    let location = StoreLocation::from_string(s);
    log::debug!("Using templates from {location}");

    match location {
        StoreLocation::Url(url) => Ok(Box::new(UrlLoader::from_url(&url, config)?)),
        StoreLocation::FileSystem(path) => Ok(Box::new(FileLoader::from_dir(path, config)?)),
    }
}
