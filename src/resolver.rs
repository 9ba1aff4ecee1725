use crate::config::LoaderConfig;

/// Turns a logical template name into the path looked up in a store.
///
/// The suffix is appended only when `name` does not already end with it, and
/// the prefix is prepended as-is. No `..` or separator normalisation happens
/// here; readers deal with that for their own stores.
///
/// # Examples
/// ```
/// use template_loader::{config::LoaderConfig, resolver::resolve};
///
/// let config = LoaderConfig { prefix: "/templates/".into(), ..Default::default() };
/// assert_eq!(resolve("home", &config), "/templates/home.hbs");
/// assert_eq!(resolve("home.hbs", &config), "/templates/home.hbs");
/// ```
pub fn resolve(name: &str, config: &LoaderConfig) -> String {
    let suffix: &str = if name.ends_with(config.suffix.as_str()) { "" } else { &config.suffix };
    let mut path = String::with_capacity(config.prefix.len() + name.len() + suffix.len());
    path.push_str(&config.prefix);
    path.push_str(name);
    path.push_str(suffix);
    path
}
