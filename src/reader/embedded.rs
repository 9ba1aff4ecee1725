use crate::error::{Error, Result};
use crate::ext::{PathExt, TemplatePathExt};
use crate::reader::interface::SourceReader;
use crate::source::Resource;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::path::Path;
use walkdir::WalkDir;

/// Reader over a namespace of resources bundled with the program.
///
/// Keys are `/`-separated paths relative to the namespace root; a leading `/`
/// in a lookup is not significant, so `/home.hbs` and `home.hbs` name the
/// same entry.
///
/// # Examples
/// ```
/// use template_loader::reader::{EmbeddedReader, SourceReader};
///
/// let reader = EmbeddedReader::new().with("views/home.hbs", &b"Hi {{name}}"[..]);
/// assert!(reader.read("/views/home.hbs").unwrap().is_some());
/// assert!(reader.read("/views/away.hbs").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedReader {
    entries: IndexMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a namespace from `(path, bytes)` pairs, typically `include_bytes!` output.
    pub fn from_static(entries: &[(&str, &'static [u8])]) -> Self {
        let mut reader = Self::new();
        for (path, bytes) in entries {
            reader.insert(path, *bytes);
        }
        reader
    }

    /// Snapshots every file below `dir` into a namespace rooted at `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::ConfigError(format!(
                "embedded resource directory '{}' does not exist",
                dir.display()
            )));
        }

        let mut reader = Self::new();
        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative =
                entry.path().strip_prefix(dir).map_err(|e| Error::Other(e.into()))?;
            let key = relative.to_slash_path()?;
            log::trace!("Embedding '{}' as '{key}'", entry.path().display());
            reader.insert(&key, std::fs::read(entry.path())?);
        }
        Ok(reader)
    }

    pub fn with(mut self, path: &str, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        self.insert(path, bytes);
        self
    }

    pub fn insert(&mut self, path: &str, bytes: impl Into<Cow<'static, [u8]>>) {
        let key = Self::key(path).unwrap_or_else(|| path.trim_root().to_string());
        self.entries.insert(key, bytes.into());
    }

    pub fn contains(&self, path: &str) -> bool {
        Self::key(path).is_some_and(|key| self.entries.contains_key(&key))
    }

    /// Paths in the namespace, in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Nothing exists above the namespace root, so a climbing path has no key.
    fn key(path: &str) -> Option<String> {
        path.normalize_segments()
    }
}

impl SourceReader for EmbeddedReader {
    fn read(&self, path: &str) -> Result<Option<Resource>> {
        let Some(key) = Self::key(path) else {
            log::debug!("Embedded path '{path}' climbs above the namespace root");
            return Ok(None);
        };
        Ok(self.entries.get(&key).map(|bytes| Resource::new(bytes.to_vec())))
    }
}
