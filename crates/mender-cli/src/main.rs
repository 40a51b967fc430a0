//! CLI entrypoint for the `mender` quick-fix tool.
//!
//! The binary delegates to [`mender_cli::run`], which parses arguments,
//! initialises telemetry, reads the diagnostics document and prints the
//! synthesised code actions.

use std::io::{self, StderrLock, StdinLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdin: StdinLock<'_> = io::stdin().lock();
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    mender_cli::run(std::env::args_os(), &mut stdin, &mut stdout, &mut stderr)
}
