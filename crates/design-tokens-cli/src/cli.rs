//! Command line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use design_tokens::{ImportOptions, DEFAULT_CSS_OUTPUT, DEFAULT_INPUT, DEFAULT_THEME_OUTPUT};

/// Import Figma design tokens and generate a Chakra UI theme.
///
/// Reads tokens exported by the Tokens Studio plugin and writes a Chakra UI
/// theme module plus CSS custom properties for non-Chakra components.
#[derive(Debug, Parser)]
#[command(name = "import-design-tokens", version, about, long_about)]
pub struct Cli {
    /// Input design tokens JSON file
    #[arg(short, long, env = "DESIGN_TOKENS_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output Chakra theme file
    #[arg(
        short,
        long,
        env = "DESIGN_TOKENS_THEME_OUTPUT",
        default_value = DEFAULT_THEME_OUTPUT
    )]
    pub output: PathBuf,

    /// Output CSS variables file
    #[arg(long, env = "DESIGN_TOKENS_CSS_OUTPUT", default_value = DEFAULT_CSS_OUTPUT)]
    pub css_output: PathBuf,

    /// Show what would be generated without writing files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Log more detail to stderr (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Freezes the parsed arguments into library options.
    pub fn options(&self) -> ImportOptions {
        ImportOptions {
            input: self.input.clone(),
            theme_output: self.output.clone(),
            css_output: self.css_output.clone(),
            dry_run: self.dry_run,
        }
    }
}
