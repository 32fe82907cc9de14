//! Chakra UI theme generation.
//!
//! The generated module has a fixed skeleton (dark color mode, global
//! styles, `Button` and `Select` defaults). Only the `brand` and `accent`
//! color blocks and the two font stacks come from the token document.

use serde::Serialize;

use crate::error::Result;
use crate::palette::Palette;
use crate::template::{Renderer, THEME_TEMPLATE};
use crate::token::TokenDocument;

/// Font stack used when the document defines no heading or body font.
pub const FALLBACK_FONT_STACK: &str =
    r#""Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif"#;

/// One `shade: 'color'` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadeEntry {
    pub key: String,
    pub value: String,
}

/// Heading and body font stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fonts {
    pub heading: String,
    pub body: String,
}

/// Everything the theme template needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeContext {
    pub brand: Vec<ShadeEntry>,
    pub accent: Vec<ShadeEntry>,
    pub fonts: Fonts,
}

impl ThemeContext {
    /// Collects theme data from a token document.
    ///
    /// Palette shades are emitted in scale order and only when present.
    pub fn from_document(doc: &TokenDocument) -> Self {
        let colors = doc.category("colors");
        let brand = Palette::parse(colors, "brand");
        let accent = Palette::parse(colors, "accent");

        Self {
            brand: scale_entries(&brand),
            accent: scale_entries(&accent),
            fonts: Fonts {
                heading: font_or_fallback(doc.font_family("heading")),
                body: font_or_fallback(doc.font_family("body")),
            },
        }
    }
}

fn scale_entries(palette: &Palette) -> Vec<ShadeEntry> {
    palette
        .scale()
        .map(|(shade, color)| ShadeEntry {
            key: shade.to_string(),
            value: color.to_string(),
        })
        .collect()
}

fn font_or_fallback(font: String) -> String {
    if font.is_empty() {
        FALLBACK_FONT_STACK.to_string()
    } else {
        font
    }
}

/// Renders the theme module with an existing renderer.
pub fn render_theme(renderer: &Renderer, doc: &TokenDocument) -> Result<String> {
    let context = ThemeContext::from_document(doc);
    tracing::debug!(
        brand = context.brand.len(),
        accent = context.accent.len(),
        "rendering theme"
    );
    renderer.render(THEME_TEMPLATE, &context)
}

/// Generates the Chakra UI theme module for a token document.
pub fn generate_theme(doc: &TokenDocument) -> Result<String> {
    render_theme(&Renderer::new()?, doc)
}
