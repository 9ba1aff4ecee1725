use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Returns
    /// * `Ok(&str)` - A string slice representing the path
    /// * `Err(Error)` - If the path contains invalid Unicode characters
    ///
    /// # Examples
    /// ```
    /// use template_loader::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("views/home.hbs");
    /// assert_eq!(path.to_str_checked().unwrap(), "views/home.hbs");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Joins the components of a relative path with `/`, whatever the host separator is.
    ///
    /// Used to turn on-disk relative paths into store keys.
    fn to_slash_path(&self) -> Result<String>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn to_slash_path(&self) -> Result<String> {
        let mut parts = Vec::new();
        for component in self.components() {
            parts.push(Path::new(component.as_os_str()).to_str_checked()?);
        }
        Ok(parts.join("/"))
    }
}
