//! `import-design-tokens`: generate a Chakra UI theme and CSS custom
//! properties from a Figma design-token export.

mod cli;
mod logging;
mod report;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use design_tokens::{write_artifact, Artifacts, ImportOptions};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = cli.options();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match run(&options, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = stdout.flush();
            match error.downcast_ref::<design_tokens::Error>() {
                Some(design_tokens::Error::InputNotFound { path }) => {
                    let _ = report::missing_input(&mut stderr, path);
                }
                _ => {
                    let _ = report::failure(&mut stderr, &error);
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// Loads, generates, then previews or writes.
///
/// Nothing is written until both artifacts have been generated.
fn run(options: &ImportOptions, out: &mut dyn Write) -> anyhow::Result<()> {
    tracing::debug!(?options, "starting import");
    let doc = options.load()?;
    report::read_from(out, &options.input)?;

    let artifacts = Artifacts::generate(&doc).context("Failed to generate artifacts")?;

    if options.dry_run {
        report::preview(out, &artifacts)?;
        return Ok(());
    }

    write_artifact(&options.theme_output, &artifacts.theme)?;
    report::written(out, "Chakra theme", &options.theme_output)?;

    write_artifact(&options.css_output, &artifacts.css)?;
    report::written(out, "CSS variables", &options.css_output)?;

    report::done(out)?;
    Ok(())
}
