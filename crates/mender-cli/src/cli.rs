//! CLI argument definitions for the `mender` tool.

use std::path::PathBuf;

use clap::Parser;
use lsp_types::Position;

use crate::errors::PositionParseError;
use crate::logging::{DEFAULT_LOG_FILTER, LogFormat};

/// Prints the quick fixes available for a file's diagnostics.
#[derive(Parser, Debug)]
#[command(name = "mender", version, disable_help_subcommand = true)]
pub(crate) struct Cli {
    /// JSON document with a `path` and its `diagnostics`, or `-` for stdin.
    #[arg(value_name = "INPUT")]
    pub(crate) input: PathBuf,
    /// Only prints actions whose range contains `LINE:CHARACTER` (0-based).
    #[arg(long, value_name = "LINE:CHARACTER", value_parser = parse_position)]
    pub(crate) at: Option<Position>,
    /// Pretty-prints the JSON output.
    #[arg(long)]
    pub(crate) pretty: bool,
    /// Tracing filter directives written to stderr.
    #[arg(long, value_name = "FILTER", default_value = DEFAULT_LOG_FILTER)]
    pub(crate) log_filter: String,
    /// Log line format.
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
}

impl Cli {
    /// Returns true when the input should be read from stdin.
    pub(crate) fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

/// Parses a `LINE:CHARACTER` cursor position.
pub(crate) fn parse_position(text: &str) -> Result<Position, PositionParseError> {
    let (line, character) = text
        .split_once(':')
        .ok_or_else(|| PositionParseError::new(text))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|_| PositionParseError::new(text))
    };
    Ok(Position::new(parse(line)?, parse(character)?))
}
