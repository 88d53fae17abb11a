//! Command-line surface of the `binrecode` binary.
//!
//! Provides the argument definition, the usage text and logging setup used by
//! `src/bin/binrecode.rs`:
//!
//! ```text
//! binrecode [-v] <SOURCE> <TARGET> [DATA]
//! ```

use std::io::{self, Read, Write};

use binrecode_codecs::{decoder_names, encoder_names};
use clap::{CommandFactory, FromArgMatches, Parser};
use tracing::Level;

use crate::error::RecodeError;
use crate::transform::transform;

#[derive(Debug, Parser)]
#[command(name = "binrecode", version)]
#[command(about = "Recode data between raw, hex, base64 and Go-literal formats")]
pub struct Cli {
    /// Format the input is encoded in
    pub source: String,

    /// Format written to standard output
    pub target: String,

    /// Input data; standard input is read when omitted
    pub data: Option<String>,

    /// Log pipeline details to standard error
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The clap command with the registered format names appended to `--help`.
    pub fn command_with_formats() -> clap::Command {
        Cli::command().after_help(formats_help())
    }

    /// Parses the process arguments, exiting with clap's message on failure.
    pub fn parse_with_formats() -> Self {
        let matches = Self::command_with_formats().get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Recodes `DATA`, or `stdin` when no data was given, into `stdout`.
    pub fn run<R: Read, W: Write>(&self, stdin: R, stdout: W) -> Result<(), RecodeError> {
        match &self.data {
            Some(data) => transform(&self.source, &self.target, data.as_bytes(), stdout),
            None => transform(&self.source, &self.target, stdin, stdout),
        }
    }
}

/// Lists decodable (`inputs`) and encodable (`outputs`) format names.
pub fn formats_help() -> String {
    format!(
        "inputs: {}\noutputs: {}",
        decoder_names().join(" "),
        encoder_names().join(" ")
    )
}

/// Usage text printed after a failed run.
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <SOURCE> <TARGET> [DATA]\n\
         if data is not set, data is read from stdin\n\
         {}\n",
        formats_help()
    )
}

/// Installs the stderr subscriber: `WARN` by default, `DEBUG` when verbose.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
