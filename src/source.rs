use chrono::{DateTime, Utc};
use std::io::Cursor;

/// Raw bytes returned by a store for a path, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub bytes: Vec<u8>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl Resource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into(), last_modified: None }
    }

    pub fn with_last_modified(mut self, last_modified: Option<DateTime<Utc>>) -> Self {
        self.last_modified = last_modified;
        self
    }
}

/// Decoded template text together with the path it was read from.
///
/// The source is owned by the caller; nothing is kept open once it has been
/// returned, and dropping it releases everything it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    path: String,
    content: String,
    last_modified: Option<DateTime<Utc>>,
}

impl TemplateSource {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into(), last_modified: None }
    }

    pub fn with_last_modified(mut self, last_modified: Option<DateTime<Utc>>) -> Self {
        self.last_modified = last_modified;
        self
    }

    /// Resolved path the content was read from.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }

    /// Modification time reported by the store, when it has one.
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    /// Streams the decoded text as UTF-8 bytes.
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(self.content.as_bytes())
    }
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}
