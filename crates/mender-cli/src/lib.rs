//! Command-line runtime for the `mender` quick-fix tool.
//!
//! The runtime reads a JSON document holding one file's diagnostics, feeds
//! each diagnostic through the [`mender_actions`] dispatcher and prints the
//! resulting code actions as JSON. IO streams are injected so tests can
//! drive the runtime without spawning the binary.

use std::ffi::OsString;
use std::io::{Read, Write};
use std::process::ExitCode;

use clap::Parser;
use mender_actions::{ActionRegistry, dispatch_all};
use tracing::{debug, info};

mod cli;
mod errors;
mod input;
mod logging;
mod output;
mod telemetry;

use cli::Cli;
use errors::AppError;
pub use logging::{DEFAULT_LOG_FILTER, LogFormat};
pub use telemetry::{TelemetryError, TelemetryHandle, initialise as initialise_telemetry};

/// Tracing target for CLI operations.
const CLI_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::run");

/// Runs the CLI with the supplied arguments and IO streams.
///
/// Returns [`ExitCode::SUCCESS`] once the actions have been written, or
/// [`ExitCode::FAILURE`] after reporting an error on `stderr`. Help and
/// version requests are written to `stdout` and succeed.
pub fn run<I, R, W, E>(args: I, stdin: &mut R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) if !error.use_stderr() => {
            return match write!(stdout, "{error}") {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(error) => return report(stderr, &AppError::CliUsage(error)),
    };

    match execute(&cli, stdin, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(stderr, &error),
    }
}

fn execute<R: Read, W: Write>(cli: &Cli, stdin: &mut R, stdout: &mut W) -> Result<(), AppError> {
    telemetry::initialise(&cli.log_filter, cli.log_format)?;

    let source = if cli.reads_stdin() {
        None
    } else {
        Some(cli.input.as_path())
    };
    let document = input::read_document(source, stdin)?;
    let uri = input::document_uri(&document.path)?;
    debug!(
        target: CLI_TARGET,
        uri = ?uri,
        diagnostics = document.diagnostics.len(),
        "loaded diagnostics document"
    );

    let mut registry = ActionRegistry::new();
    let registered = dispatch_all(&document.diagnostics, &uri, &mut registry);
    info!(target: CLI_TARGET, registered, "synthesised quick fixes");

    output::write_actions(stdout, &registry, &uri, cli.at, cli.pretty)
}

fn report<E: Write>(stderr: &mut E, error: &AppError) -> ExitCode {
    match error {
        AppError::CliUsage(usage) => {
            let _ = write!(stderr, "{usage}");
        }
        other => {
            let _ = writeln!(stderr, "mender: {other}");
        }
    }
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests;
