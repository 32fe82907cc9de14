//! Import options and generated artifacts.
//!
//! [`ImportOptions`] is built once (by the CLI, or by a test) and passed
//! by reference to everything that needs it. [`Artifacts`] holds the two
//! generated texts for one token document.

use std::path::{Path, PathBuf};

use crate::css::render_css;
use crate::error::{Error, Result};
use crate::template::Renderer;
use crate::theme::render_theme;
use crate::token::TokenDocument;

/// Default token export location.
pub const DEFAULT_INPUT: &str = "design-tokens.json";

/// Default Chakra theme module location.
pub const DEFAULT_THEME_OUTPUT: &str = "frontend/src/styles/theme.ts";

/// Default CSS custom properties location.
pub const DEFAULT_CSS_OUTPUT: &str = "frontend/src/styles/design-tokens.css";

/// Where to read tokens from and where to write the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    pub input: PathBuf,
    pub theme_output: PathBuf,
    pub css_output: PathBuf,
    /// Generate and preview only; write nothing.
    pub dry_run: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            theme_output: PathBuf::from(DEFAULT_THEME_OUTPUT),
            css_output: PathBuf::from(DEFAULT_CSS_OUTPUT),
            dry_run: false,
        }
    }
}

impl ImportOptions {
    /// Loads the token document named by [`input`](Self::input).
    pub fn load(&self) -> Result<TokenDocument> {
        TokenDocument::from_file(&self.input)
    }
}

/// The generated theme module and CSS text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub theme: String,
    pub css: String,
}

impl Artifacts {
    /// Generates both artifacts from a token document.
    pub fn generate(doc: &TokenDocument) -> Result<Self> {
        let renderer = Renderer::new()?;
        Ok(Self {
            theme: render_theme(&renderer, doc)?,
            css: render_css(&renderer, doc)?,
        })
    }
}

/// Writes `contents` to `path`, creating parent directories and replacing
/// any existing file.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    let to_error = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::write(path, contents).map_err(to_error)?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
