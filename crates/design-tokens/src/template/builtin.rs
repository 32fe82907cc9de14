//! Built-in template definitions.
//!
//! Templates are stored as `(name, content)` pairs for registration with
//! the engine. Sources live under `templates/` and are embedded at compile
//! time.

/// Name of the Chakra UI theme module template.
pub const THEME_TEMPLATE: &str = "chakra-theme.ts.jinja";

/// Name of the CSS custom properties template.
pub const CSS_TEMPLATE: &str = "design-tokens.css.jinja";

/// Every template the generators rely on.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (THEME_TEMPLATE, THEME_SOURCE),
    (CSS_TEMPLATE, CSS_SOURCE),
];

/// Chakra UI `extendTheme` module.
///
/// Template variables:
/// - `brand`, `accent`: lists of `{ key, value }` shades, already in scale order
/// - `fonts.heading`, `fonts.body`: font stacks, already defaulted
const THEME_SOURCE: &str = include_str!("../../templates/chakra-theme.ts.jinja");

/// `:root` block of CSS custom properties.
///
/// Template variables:
/// - `groups`: list of `{ title, prefix, entries }`, each entry `{ key, value }`
const CSS_SOURCE: &str = include_str!("../../templates/design-tokens.css.jinja");
