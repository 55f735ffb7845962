//! cmslint CLI binary entry point.
//! Resolves settings, runs the lint and prints the report.

use clap::Parser;
use cmslint::cli::Cli;
use cmslint::error::LintError;
use cmslint::{config, lint, output};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber on stderr.
///
/// `--debug` forces debug level; otherwise `RUST_LOG`, otherwise warnings.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cmslint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cmslint=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode, LintError> {
    let file = cli.file.as_deref().ok_or(LintError::MissingDocument)?;
    let eff = config::resolve_effective(
        file,
        cli.config.as_deref(),
        cli.output.as_deref(),
        if cli.quiet { Some(true) } else { None },
        if cli.check { Some(true) } else { None },
        &cli.disable,
    )?;
    tracing::debug!(?eff, "effective settings");
    let result = lint::run_lint(file, &eff)?;
    output::print_lint(&result, eff.output)?;
    if eff.check && result.summary.errors > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", output::error_prefix(), e);
            ExitCode::FAILURE
        }
    }
}
