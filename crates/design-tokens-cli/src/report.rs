//! User-facing progress and error messages.

use std::io::{self, Write};
use std::path::Path;

use console::{style, Style};
use design_tokens::Artifacts;

pub fn read_from(out: &mut dyn Write, path: &Path) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        style("Read design tokens from:").dim(),
        path.display()
    )
}

/// Prints both artifacts verbatim; only the framing lines are styled.
pub fn preview(out: &mut dyn Write, artifacts: &Artifacts) -> io::Result<()> {
    let header = Style::new().bold().cyan();
    writeln!(out)?;
    writeln!(out, "{}", header.apply_to("--- Generated theme.ts ---"))?;
    writeln!(out, "{}", artifacts.theme)?;
    writeln!(out)?;
    writeln!(out, "{}", header.apply_to("--- Generated design-tokens.css ---"))?;
    writeln!(out, "{}", artifacts.css)?;
    writeln!(out)?;
    writeln!(out, "{}", style("(Dry run - no files written)").yellow())
}

pub fn written(out: &mut dyn Write, what: &str, path: &Path) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        style(format!("Written {what} to:")).green(),
        path.display()
    )
}

pub fn done(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} Run '{}' to apply changes.",
        style("Done!").green().bold(),
        style("make build-frontend").bold()
    )
}

/// Explains how to produce the missing token export.
pub fn missing_input(err: &mut dyn Write, path: &Path) -> io::Result<()> {
    let red = Style::new().red().bold().for_stderr();
    writeln!(
        err,
        "{} Input file '{}' not found",
        red.apply_to("Error:"),
        path.display()
    )?;
    writeln!(err)?;
    writeln!(err, "To get started:")?;
    writeln!(err, "  1. Export tokens from Figma using Tokens Studio plugin")?;
    writeln!(err, "  2. Save as '{}'", path.display())?;
    writeln!(err, "  3. Run this command again")
}

pub fn failure(err: &mut dyn Write, error: &anyhow::Error) -> io::Result<()> {
    let red = Style::new().red().bold().for_stderr();
    writeln!(err, "{} {:#}", red.apply_to("Error:"), error)
}
