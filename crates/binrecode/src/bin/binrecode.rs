//! `binrecode` — recode DATA (or stdin) from one format to another (stdout).
//!
//! Usage:
//!   binrecode [-v] <SOURCE> <TARGET> [DATA]

use std::io;

use binrecode::cli::{init_logging, usage, Cli};

fn main() {
    let cli = Cli::parse_with_formats();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = cli.run(stdin.lock(), stdout.lock()) {
        eprintln!("{e}");
        eprint!("{}", usage(env!("CARGO_BIN_NAME")));
        std::process::exit(1);
    }
}
