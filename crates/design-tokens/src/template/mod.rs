//! Template rendering for generated artifacts.
//!
//! Each artifact is a MiniJinja template filled from a serializable context.
//! The generators in [`crate::theme`] and [`crate::css`] build those contexts;
//! this module only knows how to turn a context into text.
//!
//! ## Key Types
//!
//! - [`Renderer`]: engine pre-loaded with the built-in templates
//! - [`TemplateEngine`]: backend seam, implemented by [`MiniJinjaEngine`]
//! - [`BUILTIN_TEMPLATES`]: the embedded template sources

mod builtin;
mod engine;

pub use builtin::{BUILTIN_TEMPLATES, CSS_TEMPLATE, THEME_TEMPLATE};
pub use engine::{MiniJinjaEngine, TemplateEngine};

use serde::Serialize;

use crate::error::{Error, Result};

/// A template engine with the built-in templates registered.
///
/// Templates are compiled once and reused for every render.
///
/// ```rust
/// use design_tokens::template::{Renderer, CSS_TEMPLATE};
/// use serde_json::json;
///
/// let renderer = Renderer::new().unwrap();
/// let css = renderer
///     .render(CSS_TEMPLATE, &json!({ "groups": [] }))
///     .unwrap();
/// assert_eq!(css, ":root {\n}\n");
/// ```
pub struct Renderer {
    engine: Box<dyn TemplateEngine>,
}

impl Renderer {
    /// Creates a renderer backed by [`MiniJinjaEngine`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if a built-in template fails to compile.
    pub fn new() -> Result<Self> {
        Self::with_engine(Box::new(MiniJinjaEngine::new()))
    }

    /// Creates a renderer on top of a custom engine, registering the
    /// built-in templates into it.
    pub fn with_engine(mut engine: Box<dyn TemplateEngine>) -> Result<Self> {
        for (name, source) in BUILTIN_TEMPLATES {
            engine.add_template(name, source)?;
        }
        Ok(Self { engine })
    }

    /// Renders a registered template with serializable data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let value = serde_json::to_value(data).map_err(|e| Error::Template(e.to_string()))?;
        self.engine.render_named(name, &value)
    }

    /// Checks if a template with the given name is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.engine.has_template(name)
    }
}
