use crate::error::{Error, Result};
use crate::loader::interface::TemplateLoader;
use crate::source::TemplateSource;

/// Tries a list of loaders in order and returns the first template found.
///
/// Only [`Error::NotFound`] moves on to the next loader; any other error
/// stops the chain and is returned as-is.
pub struct CompositeLoader {
    loaders: Vec<Box<dyn TemplateLoader + Send + Sync>>,
}

impl CompositeLoader {
    pub fn new(loaders: Vec<Box<dyn TemplateLoader + Send + Sync>>) -> Result<Self> {
        if loaders.is_empty() {
            return Err(Error::ConfigError("a composite loader needs at least one loader".into()));
        }
        Ok(Self { loaders })
    }

    pub fn loaders(&self) -> &[Box<dyn TemplateLoader + Send + Sync>] {
        &self.loaders
    }

    // `new` guarantees at least one delegate.
    fn first(&self) -> &(dyn TemplateLoader + Send + Sync) {
        &*self.loaders[0]
    }
}

impl TemplateLoader for CompositeLoader {
    fn resolve(&self, name: &str) -> String {
        self.first().resolve(name)
    }

    fn load(&self, name: &str) -> Result<TemplateSource> {
        let mut last_miss = None;
        for (index, loader) in self.loaders.iter().enumerate() {
            match loader.load(name) {
                Ok(source) => return Ok(source),
                Err(err) if err.is_not_found() => {
                    log::trace!("Loader #{index} has no template '{name}': {err}");
                    last_miss = Some(err);
                }
                Err(err) => {
                    log::warn!("Loader #{index} failed for template '{name}': {err}");
                    return Err(err);
                }
            }
        }
        Err(last_miss.unwrap_or_else(|| Error::NotFound {
            name: name.to_string(),
            path: self.resolve(name),
        }))
    }

    fn prefix(&self) -> &str {
        self.first().prefix()
    }

    fn suffix(&self) -> &str {
        self.first().suffix()
    }
}
