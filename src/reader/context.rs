use crate::error::{Error, Result};
use crate::ext::TemplatePathExt;
use crate::reader::interface::SourceReader;
use crate::source::Resource;
use std::io::{Cursor, Read};

/// Resource lookup offered by a hosting application.
///
/// `Ok(None)` means the host has nothing at `path`; `Err` means the host
/// could not be asked or failed while opening the resource.
pub trait ResourceContext {
    fn resource(&self, path: &str) -> std::io::Result<Option<Box<dyn Read + '_>>>;
}

impl<F> ResourceContext for F
where
    F: Fn(&str) -> std::io::Result<Option<Vec<u8>>>,
{
    fn resource(&self, path: &str) -> std::io::Result<Option<Box<dyn Read + '_>>> {
        match self(path)? {
            Some(bytes) => Ok(Some(Box::new(Cursor::new(bytes)))),
            None => Ok(None),
        }
    }
}

/// Reader that delegates lookups to the hosting application's namespace.
///
/// Paths are handed to the host unchanged, except that paths whose `..`
/// segments climb above the namespace root are rejected with
/// [`Error::PathTraversalError`] before the host is asked.
pub struct ContextReader<C> {
    context: C,
}

impl<C: ResourceContext> ContextReader<C> {
    pub fn new(context: C) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &C {
        &self.context
    }
}

impl<C: ResourceContext> SourceReader for ContextReader<C> {
    fn read(&self, path: &str) -> Result<Option<Resource>> {
        if path.normalize_segments().is_none() {
            return Err(Error::PathTraversalError { path: path.to_string() });
        }

        let Some(mut stream) = self.context.resource(path)? else {
            log::debug!("Hosting context has no resource at '{path}'");
            return Ok(None);
        };
        let mut bytes = Vec::new();
        stream.read_to_end(&mut bytes)?;
        Ok(Some(Resource::new(bytes)))
    }
}
