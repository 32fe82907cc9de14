//! Template engine abstraction.
//!
//! [`TemplateEngine`] is the seam between the generators and the template
//! backend. The default implementation is [`MiniJinjaEngine`], configured
//! for source-code output rather than HTML.

use minijinja::{AutoEscape, Environment, Value};

use crate::error::Result;

/// A template engine that can render templates with data.
pub trait TemplateEngine: Send + Sync {
    /// Adds a named template to the engine.
    ///
    /// The template is compiled and cached for later use via
    /// [`render_named`](Self::render_named).
    fn add_template(&mut self, name: &str, source: &str) -> Result<()>;

    /// Renders a previously registered template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine.
///
/// Block tags swallow their own line (`trim_blocks` and `lstrip_blocks`),
/// the final newline of a template is kept, and auto-escaping is off: the
/// output is TypeScript and CSS, where HTML escaping would corrupt values.
///
/// ```rust
/// use design_tokens::template::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let mut engine = MiniJinjaEngine::new();
/// engine
///     .add_template("list", "{% for c in colors %}\n{{ c }};\n{% endfor %}\n")
///     .unwrap();
/// let output = engine
///     .render_named("list", &json!({ "colors": ["a", "b"] }))
///     .unwrap();
/// assert_eq!(output, "a;\nb;\n");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new engine with source-output settings applied.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        let value = Value::from_serialize(data);
        Ok(tmpl.render(value)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}
