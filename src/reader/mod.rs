//! Backing stores that template paths are read from.
//!
//! Every store implements [`SourceReader`]: it reports a positive absence as
//! `Ok(None)` and reserves `Err` for stores that were reachable but failed.

pub mod context;
pub mod embedded;
pub mod filesystem;
pub mod interface;
pub mod url;

pub use context::{ContextReader, ResourceContext};
pub use embedded::EmbeddedReader;
pub use filesystem::FileSystemReader;
pub use interface::SourceReader;
pub use url::UrlReader;
