//! # Design Tokens - Theme and CSS Generation
//!
//! `design-tokens` turns a design-token export (JSON, as written by Figma's
//! Tokens Studio plugin) into two artifacts:
//!
//! - a Chakra UI theme module (`theme.ts`)
//! - a `:root` block of CSS custom properties (`design-tokens.css`)
//!
//! Generation is deterministic: the same document always produces the same
//! bytes. Missing or oddly shaped tokens never fail generation; they are
//! omitted or replaced by fallbacks.
//!
//! ## Quick Start
//!
//! ```rust
//! use design_tokens::{Artifacts, TokenDocument};
//!
//! let doc = TokenDocument::from_json(r##"{
//!     "colors": { "brand": { "500": { "value": "#ff0000" } } }
//! }"##).unwrap();
//!
//! let artifacts = Artifacts::generate(&doc).unwrap();
//! assert!(artifacts.theme.contains("      500: '#ff0000',\n"));
//! assert!(artifacts.css.contains("  --color-brand-500: #ff0000;\n"));
//! ```
//!
//! ## Core Concepts
//!
//! - [`Token`]: a token entry, either a literal or an object with `value`/`$value`
//! - [`TokenDocument`]: the parsed export with lookup-with-default accessors
//! - [`Palette`]: shade → color mapping with metadata keys removed
//! - [`ThemeContext`] / [`CssContext`]: the data each template is filled with
//! - [`ImportOptions`]: input and output paths plus the dry-run flag

pub mod css;
pub mod error;
pub mod import;
pub mod palette;
pub mod template;
pub mod theme;
pub mod token;

pub use css::{generate_css, CssContext, CssEntry, CssGroup};
pub use error::{Error, Result};
pub use import::{
    write_artifact, Artifacts, ImportOptions, DEFAULT_CSS_OUTPUT, DEFAULT_INPUT,
    DEFAULT_THEME_OUTPUT,
};
pub use palette::{Palette, SHADE_SCALE};
pub use theme::{generate_theme, Fonts, ShadeEntry, ThemeContext, FALLBACK_FONT_STACK};
pub use token::{extract_value, Token, TokenDocument};
