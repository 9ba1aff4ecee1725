//! Locates and opens template sources by logical name.
//!
//! A [`Loader`] turns a name such as `home` into a store path such as
//! `/templates/home.hbs` and reads it from one backing store: bundled
//! resources, a directory, a URL, or a hosting application's namespace.

/// Defines custom error types.
pub mod error;

/// Constants shared by configuration and readers.
pub mod constants;

/// Loader configuration and config file parsing.
pub mod config;

/// Character encodings for decoding template bytes.
pub mod encoding;

/// Maps logical template names to store paths.
pub mod resolver;

/// Opened template content.
pub mod source;

/// Backing stores that template bytes are read from.
pub mod reader;

/// An abstraction that allows loading templates by name from any store.
pub mod loader;

/// Extension traits for paths.
pub mod ext;

pub use config::LoaderConfig;
pub use encoding::Encoding;
pub use error::{Error, ErrorKind, Result};
pub use loader::{
    loader_for, ClassPathLoader, CompositeLoader, ContextLoader, FileLoader, Loader,
    TemplateLoader, UrlLoader,
};
pub use source::TemplateSource;
