use crate::loader::interface::TemplateLoader;
use ::minijinja::{Environment, ErrorKind};

/// Installs `loader` as the template source of a MiniJinja environment.
///
/// A missing template is reported to MiniJinja as "no such template";
/// every other loader error becomes an [`ErrorKind::InvalidOperation`]
/// error carrying the original as its source.
pub fn set_loader<L>(env: &mut Environment<'_>, loader: L)
where
    L: TemplateLoader + Send + Sync + 'static,
{
    env.set_loader(move |name| match loader.load(name) {
        Ok(source) => Ok(Some(source.into_content())),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(::minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("cannot load template '{name}'"),
        )
        .with_source(err)),
    });
}
