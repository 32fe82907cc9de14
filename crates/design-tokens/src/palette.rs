//! Shade-keyed color palettes.
//!
//! A palette is a group under `colors` (for example `colors.brand`) whose
//! keys are shades and whose values are color tokens. Keys starting with
//! [`METADATA_PREFIX`] and the [`DESCRIPTION_KEY`] are metadata, not shades.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::token::Token;

/// The shade scale emitted into the theme, lightest to darkest.
pub const SHADE_SCALE: &[&str] = &[
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];

/// Keys starting with this character carry token metadata.
pub const METADATA_PREFIX: char = '$';

/// Free-text description key that may sit next to the shades.
pub const DESCRIPTION_KEY: &str = "description";

/// An ordered mapping of shade key to color string.
///
/// Entries keep the order they had in the token file. Every stored value is
/// non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    shades: IndexMap<String, String>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the palette `name` out of a `colors` mapping.
    ///
    /// A missing `colors` mapping, a missing palette, or a palette that is
    /// not an object all produce an empty palette. Entries whose token is
    /// [falsy](Token::is_falsy) are dropped.
    pub fn parse(colors: Option<&Map<String, Value>>, name: &str) -> Self {
        let Some(entries) = colors
            .and_then(|c| c.get(name))
            .and_then(Value::as_object)
        else {
            tracing::debug!(palette = name, "palette not present");
            return Self::new();
        };

        let shades: IndexMap<String, String> = entries
            .iter()
            .filter(|(key, _)| !is_metadata_key(key))
            .filter_map(|(key, token)| {
                Token::from(token)
                    .truthy_value()
                    .map(|color| (key.clone(), color))
            })
            .collect();

        tracing::debug!(palette = name, shades = shades.len(), "parsed palette");
        Self { shades }
    }

    /// Adds or replaces a shade. Empty colors are ignored.
    pub fn with_shade(mut self, shade: impl Into<String>, color: impl Into<String>) -> Self {
        let color = color.into();
        if !color.is_empty() {
            self.shades.insert(shade.into(), color);
        }
        self
    }

    /// Returns the color for a shade.
    pub fn get(&self, shade: &str) -> Option<&str> {
        self.shades.get(shade).map(String::as_str)
    }

    /// Iterates entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.shades.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates the shades of [`SHADE_SCALE`] that are present, in scale order.
    pub fn scale(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        SHADE_SCALE
            .iter()
            .filter_map(move |shade| self.get(shade).map(|color| (*shade, color)))
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }
}

fn is_metadata_key(key: &str) -> bool {
    key.starts_with(METADATA_PREFIX) || key == DESCRIPTION_KEY
}
