use crate::error::Result;
use crate::source::TemplateSource;
use std::sync::Arc;

/// Trait for loading template sources by logical name.
pub trait TemplateLoader {
    /// Computes the store path a logical name is looked up at.
    fn resolve(&self, name: &str) -> String;

    /// Loads the template called `name`.
    ///
    /// # Returns
    /// * `Ok(TemplateSource)` - The decoded template text
    /// * `Err(Error::NotFound)` - Nothing exists at the resolved path
    /// * `Err(_)` - The store was reachable but reading or decoding failed
    fn load(&self, name: &str) -> Result<TemplateSource>;

    fn prefix(&self) -> &str;

    fn suffix(&self) -> &str;
}

impl<L: TemplateLoader + ?Sized> TemplateLoader for Box<L> {
    fn resolve(&self, name: &str) -> String {
        (**self).resolve(name)
    }

    fn load(&self, name: &str) -> Result<TemplateSource> {
        (**self).load(name)
    }

    fn prefix(&self) -> &str {
        (**self).prefix()
    }

    fn suffix(&self) -> &str {
        (**self).suffix()
    }
}

impl<L: TemplateLoader + ?Sized> TemplateLoader for Arc<L> {
    fn resolve(&self, name: &str) -> String {
        (**self).resolve(name)
    }

    fn load(&self, name: &str) -> Result<TemplateSource> {
        (**self).load(name)
    }

    fn prefix(&self) -> &str {
        (**self).prefix()
    }

    fn suffix(&self) -> &str {
        (**self).suffix()
    }
}
