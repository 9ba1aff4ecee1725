use crate::encoding::Encoding;
use crate::error::Result;
use crate::source::{Resource, TemplateSource};
use std::sync::Arc;

/// A store that can be asked for the bytes behind a resolved path.
pub trait SourceReader {
    /// Reads the raw resource at `path`.
    ///
    /// # Returns
    /// * `Ok(Some(Resource))` - The store has the resource
    /// * `Ok(None)` - The store positively reports that nothing lives at `path`
    /// * `Err(Error)` - The store was reachable but the read failed
    fn read(&self, path: &str) -> Result<Option<Resource>>;

    /// Reads `path` and decodes it with `encoding`.
    ///
    /// Bytes that are invalid in `encoding` are a decode error, never an absence.
    fn read_source(&self, path: &str, encoding: Encoding) -> Result<Option<TemplateSource>> {
        let Some(resource) = self.read(path)? else {
            return Ok(None);
        };
        let content = encoding.decode_at(path, &resource.bytes)?;
        Ok(Some(TemplateSource::new(path, content).with_last_modified(resource.last_modified)))
    }
}

impl<R: SourceReader + ?Sized> SourceReader for Box<R> {
    fn read(&self, path: &str) -> Result<Option<Resource>> {
        (**self).read(path)
    }
}

impl<R: SourceReader + ?Sized> SourceReader for Arc<R> {
    fn read(&self, path: &str) -> Result<Option<Resource>> {
        (**self).read(path)
    }
}

impl<R: SourceReader + ?Sized> SourceReader for &R {
    fn read(&self, path: &str) -> Result<Option<Resource>> {
        (**self).read(path)
    }
}
