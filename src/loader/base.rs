use crate::config::LoaderConfig;
use crate::encoding::Encoding;
use crate::error::{Error, Result};
use crate::loader::interface::TemplateLoader;
use crate::reader::{
    ContextReader, EmbeddedReader, FileSystemReader, SourceReader, UrlReader,
};
use crate::resolver::resolve;
use crate::source::TemplateSource;
use std::path::Path;

/// Loader that resolves names with a [`LoaderConfig`] and reads them from one store.
///
/// Configuration changes take `&mut self`, so they cannot race with `load`
/// calls made through shared references; finish configuring before sharing
/// the loader between threads.
#[derive(Debug, Clone)]
pub struct Loader<R> {
    reader: R,
    config: LoaderConfig,
}

/// Loader over resources bundled with the program.
pub type ClassPathLoader = Loader<EmbeddedReader>;
/// Loader over a directory on the local filesystem.
pub type FileLoader = Loader<FileSystemReader>;
/// Loader over HTTP(S) or `file://` URLs.
pub type UrlLoader = Loader<UrlReader>;
/// Loader over a hosting application's resource namespace.
pub type ContextLoader<C> = Loader<ContextReader<C>>;

impl<R: SourceReader> Loader<R> {
    /// Creates a loader with the default prefix, suffix and encoding.
    pub fn new(reader: R) -> Self {
        Self { reader, config: LoaderConfig::default() }
    }

    pub fn with_config(reader: R, config: LoaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { reader, config })
    }

    pub fn builder() -> LoaderBuilder<R> {
        LoaderBuilder::default()
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn encoding(&self) -> Encoding {
        self.config.encoding
    }

    /// Replaces the prefix; the loader is left unchanged if the result is invalid.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> Result<()> {
        let config = LoaderConfig { prefix: prefix.into(), ..self.config.clone() };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Replaces the suffix; the loader is left unchanged if the result is invalid.
    pub fn set_suffix(&mut self, suffix: impl Into<String>) -> Result<()> {
        let config = LoaderConfig { suffix: suffix.into(), ..self.config.clone() };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.config.encoding = encoding;
    }
}

impl Loader<FileSystemReader> {
    /// Creates a loader over the directory `root`.
    pub fn from_dir<P: AsRef<Path>>(root: P, config: LoaderConfig) -> Result<Self> {
        Self::with_config(FileSystemReader::new(root)?, config)
    }
}

impl Loader<UrlReader> {
    /// Creates a loader over the base URL `base`.
    pub fn from_url(base: &str, config: LoaderConfig) -> Result<Self> {
        Self::with_config(UrlReader::new(base)?, config)
    }
}

impl<R: SourceReader> TemplateLoader for Loader<R> {
    fn resolve(&self, name: &str) -> String {
        resolve(name, &self.config)
    }

    fn load(&self, name: &str) -> Result<TemplateSource> {
        let path = self.resolve(name);
        log::debug!("Loading template '{name}' from '{path}'");

        match self.reader.read_source(&path, self.config.encoding)? {
            Some(source) => Ok(source),
            None => {
                log::debug!("Template '{name}' is not present at '{path}'");
                Err(Error::NotFound { name: name.to_string(), path })
            }
        }
    }

    fn prefix(&self) -> &str {
        &self.config.prefix
    }

    fn suffix(&self) -> &str {
        &self.config.suffix
    }
}

/// Step-by-step construction of a [`Loader`].
///
/// `build` fails when no reader was supplied, so a loader never exists
/// without a backing store.
#[derive(Debug)]
pub struct LoaderBuilder<R> {
    reader: Option<R>,
    config: LoaderConfig,
}

impl<R> Default for LoaderBuilder<R> {
    fn default() -> Self {
        Self { reader: None, config: LoaderConfig::default() }
    }
}

impl<R: SourceReader> LoaderBuilder<R> {
    pub fn reader(mut self, reader: R) -> Self {
        self.reader = Some(reader);
        self
    }

    pub fn config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.suffix = suffix.into();
        self
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    pub fn build(self) -> Result<Loader<R>> {
        let reader = self.reader.ok_or_else(|| {
            Error::ConfigError("a template loader requires a backing store".into())
        })?;
        Loader::with_config(reader, self.config)
    }
}
