//! Binary entry point for the `punyconv` command-line tool.
//!
//! # Control flow
//!
//! 1. [`parse_args`] processes all flags and builds a [`ParsedArgs`] value.
//! 2. [`punyconv::pipeline::run`] performs the read → transform → write
//!    sequence.
//!
//! Exit codes: 0 on success (and for `--help`), 255 for a malformed command
//! line, 1 for any runtime failure (stream or transform). Exactly one
//! diagnostic is printed per failure, always on stderr; transformed output
//! only ever goes to the selected sink.

use punyconv::cli::args::{parse_args, ParsedArgs};
use punyconv::cli::constants::PROGRAM_NAME;
use punyconv::cli::help::error_out;

fn main() {
    // Argument parsing. A usage error exits 255 before any stream is opened.
    let args: ParsedArgs = match parse_args() {
        Ok(a) => a,
        Err(e) => error_out(&format!("{}: {:#}", PROGRAM_NAME, e)),
    };

    // --help short-circuits straight to a clean exit.
    if args.exit_early {
        std::process::exit(0);
    }

    match punyconv::pipeline::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            // `{:#}` renders the full cause chain on one line.
            eprintln!("{}: {:#}", PROGRAM_NAME, e);
            std::process::exit(1);
        }
    }
}
