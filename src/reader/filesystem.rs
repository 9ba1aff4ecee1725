use crate::error::{Error, Result};
use crate::ext::TemplatePathExt;
use crate::reader::interface::SourceReader;
use crate::source::Resource;
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reader for templates below a root directory on the local filesystem.
///
/// Paths are resolved relative to the root whether or not they start with
/// `/`. A path whose `..` segments climb above the root, or which leads
/// through a symlink to a file outside the root, is rejected with
/// [`Error::PathTraversalError`].
#[derive(Debug, Clone)]
pub struct FileSystemReader {
    root: PathBuf,
}

impl FileSystemReader {
    /// Creates a reader rooted at `root`, which must be an existing directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::ConfigError(format!(
                "template root '{}' is not a directory",
                root.display()
            )));
        }
        Ok(Self { root: root.canonicalize()? })
    }

    /// Canonical root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a store path to a file below the root without touching the disk.
    pub fn locate(&self, path: &str) -> Result<PathBuf> {
        let relative = path
            .normalize_segments()
            .ok_or_else(|| Error::PathTraversalError { path: path.to_string() })?;
        Ok(self.root.join(relative))
    }
}

fn is_absent(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::NotFound | ErrorKind::NotADirectory)
}

impl SourceReader for FileSystemReader {
    fn read(&self, path: &str) -> Result<Option<Resource>> {
        let file_path = self.locate(path)?;
        log::trace!("Reading '{path}' from '{}'", file_path.display());

        let metadata = match std::fs::metadata(&file_path) {
            Ok(metadata) => metadata,
            Err(e) if is_absent(e.kind()) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if metadata.is_dir() {
            return Ok(None);
        }

        let canonical = file_path.canonicalize()?;
        if !canonical.starts_with(&self.root) {
            log::warn!("'{}' resolves outside of '{}'", path, self.root.display());
            return Err(Error::PathTraversalError { path: path.to_string() });
        }

        let bytes = match std::fs::read(&canonical) {
            Ok(bytes) => bytes,
            Err(e) if is_absent(e.kind()) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let last_modified = metadata.modified().ok().map(DateTime::<Utc>::from);
        Ok(Some(Resource::new(bytes).with_last_modified(last_modified)))
    }
}
