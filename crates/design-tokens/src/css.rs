//! CSS custom property generation.
//!
//! Produces a single `:root` block for styling code that does not go
//! through the Chakra theme. Brand and accent palettes are always present
//! (possibly empty). The scenario, site-creation and choropleth groups are
//! emitted only when their category under `colors` is a non-empty object.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::palette::Palette;
use crate::template::{Renderer, CSS_TEMPLATE};
use crate::token::{extract_value, TokenDocument};

/// Keys read from `colors.scenarios`.
pub const SCENARIO_KEYS: [&str; 3] = ["reference", "current", "future"];

/// Keys read from `colors.siteCreation`.
pub const SITE_CREATION_KEYS: [&str; 4] = ["primary", "secondary", "accent", "glow"];

/// Number of steps in `colors.prismColorScale`, keyed `"0"` to `"7"`.
pub const PRISM_SCALE_STEPS: usize = 8;

/// One `--color-<prefix>-<key>: <value>;` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssEntry {
    pub key: String,
    pub value: String,
}

/// A commented section of declarations sharing a name prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssGroup {
    pub title: &'static str,
    pub prefix: &'static str,
    pub entries: Vec<CssEntry>,
}

/// Everything the CSS template needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssContext {
    pub groups: Vec<CssGroup>,
}

impl CssContext {
    /// Collects the CSS groups from a token document, in output order.
    pub fn from_document(doc: &TokenDocument) -> Self {
        let colors = doc.category("colors");

        let mut groups = vec![
            palette_group("Brand Colors", "brand", &Palette::parse(colors, "brand")),
            palette_group("Accent Colors", "accent", &Palette::parse(colors, "accent")),
        ];

        if let Some(scenarios) = populated(doc, "scenarios") {
            groups.push(CssGroup {
                title: "Scenario Colors",
                prefix: "scenario",
                entries: keyed_entries(scenarios, SCENARIO_KEYS),
            });
        }

        if let Some(site) = populated(doc, "siteCreation") {
            groups.push(CssGroup {
                title: "Site Creation Colors",
                prefix: "site",
                entries: keyed_entries(site, SITE_CREATION_KEYS),
            });
        }

        if let Some(prism) = populated(doc, "prismColorScale") {
            let steps: Vec<String> = (0..PRISM_SCALE_STEPS).map(|i| i.to_string()).collect();
            groups.push(CssGroup {
                title: "PRISM Color Scale (Choropleth)",
                prefix: "prism",
                entries: keyed_entries(prism, steps.iter().map(String::as_str)),
            });
        }

        tracing::debug!(groups = groups.len(), "collected css groups");
        Self { groups }
    }
}

fn palette_group(title: &'static str, prefix: &'static str, palette: &Palette) -> CssGroup {
    CssGroup {
        title,
        prefix,
        entries: palette
            .iter()
            .map(|(shade, color)| CssEntry {
                key: shade.to_string(),
                value: color.to_string(),
            })
            .collect(),
    }
}

/// Returns `colors.<name>` when it is an object with at least one entry.
fn populated<'a>(doc: &'a TokenDocument, name: &str) -> Option<&'a Map<String, Value>> {
    doc.group("colors", name).filter(|group| !group.is_empty())
}

/// Emits the present keys, in the given order, keeping empty values.
fn keyed_entries<'k>(
    group: &Map<String, Value>,
    keys: impl IntoIterator<Item = &'k str>,
) -> Vec<CssEntry> {
    keys.into_iter()
        .filter_map(|key| {
            group.get(key).map(|token| CssEntry {
                key: key.to_string(),
                value: extract_value(token),
            })
        })
        .collect()
}

/// Renders the CSS custom properties with an existing renderer.
pub fn render_css(renderer: &Renderer, doc: &TokenDocument) -> Result<String> {
    renderer.render(CSS_TEMPLATE, &CssContext::from_document(doc))
}

/// Generates the CSS custom properties for a token document.
pub fn generate_css(doc: &TokenDocument) -> Result<String> {
    render_css(&Renderer::new()?, doc)
}
