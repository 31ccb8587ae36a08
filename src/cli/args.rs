//! Command-line argument parsing for the `punyconv` binary.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both return a [`ParsedArgs`] value describing the run.
//!
//! The option surface is closed: `-h`/`-?`/`--help`, `-D`/`--decode`,
//! `-i`/`--input` and `-o`/`--output`. Value flags take the next token;
//! there is no `--option=value` form and no short-option aggregation. Any
//! other token, including a bare positional argument, is a usage error.
//!
//! Bad or unrecognised options return an `Err` with a human-readable message
//! that begins with `"bad usage: "`.
//!
//! Input and output stay plain descriptor strings here; no file is opened or
//! created until the pipeline actually reads or writes, so a malformed later
//! argument cannot truncate a file named by an earlier `-o`.

use anyhow::anyhow;

use crate::cli::constants::STDIO_MARK;
use crate::cli::help::print_usage;
use crate::transform::Direction;

/// Run configuration produced by the argument parsing loop.
///
/// Built once from `argv`, then handed read-only to [`crate::pipeline::run`].
#[derive(Debug)]
pub struct ParsedArgs {
    /// Transform direction (default: [`Direction::Encode`]).
    pub direction: Direction,
    /// Input descriptor: a path, or `"-"` for stdin.
    pub input: String,
    /// Output descriptor: a path, or `"-"` for stdout.
    pub output: String,
    /// When `true`, a help flag was processed; the caller should exit 0
    /// without performing any I/O.
    pub exit_early: bool,
}

impl Default for ParsedArgs {
    fn default() -> Self {
        ParsedArgs {
            direction: Direction::Encode,
            input: STDIO_MARK.to_owned(),
            output: STDIO_MARK.to_owned(),
            exit_early: false,
        }
    }
}

/// Parse `std::env::args()` (skipping argv[0]).
///
/// Delegates to [`parse_args_from`] after collecting `argv` into a `Vec<String>`.
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    let exe_name = std::env::args()
        .next()
        .unwrap_or_else(|| crate::cli::constants::PROGRAM_NAME.to_owned());
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&exe_name, &argv)
}

/// Parse an explicit argument list.
///
/// `exe_name` is argv[0] (used for the usage text). `argv` is argv[1..].
/// This variant is callable from tests without touching `std::env`.
pub fn parse_args_from(exe_name: &str, argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let mut args = ParsedArgs::default();

    let mut arg_idx = 0usize;
    while arg_idx < argv.len() {
        let argument = argv[arg_idx].as_str();
        match argument {
            "-h" | "-?" | "--help" => {
                print_usage(exe_name);
                args.exit_early = true;
                return Ok(args);
            }
            "-D" | "--decode" => {
                args.direction = Direction::Decode;
            }
            "-i" | "--input" => {
                args.input = take_value(argv, &mut arg_idx, argument)?;
            }
            "-o" | "--output" => {
                args.output = take_value(argv, &mut arg_idx, argument)?;
            }
            _ => {
                return Err(anyhow!("bad usage: invalid argument '{}'", argument));
            }
        }
        arg_idx += 1;
    }

    Ok(args)
}

/// Consume the value token following the flag at `argv[*arg_idx]`.
///
/// Advances `arg_idx` past the value. A flag at the end of `argv`, or one
/// followed by an empty token, is a usage error.
fn take_value(argv: &[String], arg_idx: &mut usize, flag: &str) -> anyhow::Result<String> {
    *arg_idx += 1;
    match argv.get(*arg_idx) {
        Some(val) if !val.is_empty() => Ok(val.clone()),
        _ => Err(anyhow!(
            "bad usage: value of '{}' must be a non-empty string",
            flag
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> anyhow::Result<ParsedArgs> {
        let owned: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
        parse_args_from("punyconv", &owned)
    }

    #[test]
    fn defaults_are_encode_stdin_stdout() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.direction, Direction::Encode);
        assert_eq!(args.input, "-");
        assert_eq!(args.output, "-");
        assert!(!args.exit_early);
    }

    #[test]
    fn decode_short_and_long() {
        assert_eq!(parse(&["-D"]).unwrap().direction, Direction::Decode);
        assert_eq!(parse(&["--decode"]).unwrap().direction, Direction::Decode);
    }

    #[test]
    fn input_output_short_and_long() {
        let args = parse(&["-i", "in.txt", "-o", "out.txt"]).unwrap();
        assert_eq!(args.input, "in.txt");
        assert_eq!(args.output, "out.txt");

        let args = parse(&["--input", "a", "--output", "b"]).unwrap();
        assert_eq!(args.input, "a");
        assert_eq!(args.output, "b");
    }

    #[test]
    fn dash_value_selects_stdio() {
        let args = parse(&["-i", "-", "-o", "-"]).unwrap();
        assert_eq!(args.input, "-");
        assert_eq!(args.output, "-");
    }

    #[test]
    fn help_short_circuits_remaining_args() {
        // A bogus flag after --help must not be reached.
        let args = parse(&["--help", "--bogus"]).unwrap();
        assert!(args.exit_early);
    }

    #[test]
    fn question_mark_is_help() {
        assert!(parse(&["-?"]).unwrap().exit_early);
    }

    #[test]
    fn value_flag_at_end_is_error() {
        let err = parse(&["-i"]).unwrap_err();
        assert!(err.to_string().starts_with("bad usage:"), "{}", err);
    }

    #[test]
    fn empty_value_is_error() {
        let err = parse(&["-o", ""]).unwrap_err();
        assert!(err.to_string().starts_with("bad usage:"), "{}", err);
    }

    #[test]
    fn unknown_option_is_error() {
        let err = parse(&["--bogus"]).unwrap_err();
        assert!(err.to_string().contains("--bogus"), "{}", err);
    }

    #[test]
    fn positional_argument_is_error() {
        let err = parse(&["somefile"]).unwrap_err();
        assert!(err.to_string().contains("somefile"), "{}", err);
    }

    #[test]
    fn later_flags_override_earlier_values() {
        let args = parse(&["-i", "a", "-i", "b"]).unwrap();
        assert_eq!(args.input, "b");
    }
}
