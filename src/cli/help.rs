// cli/help.rs — usage text and hard-exit helpers.
//
// Usage goes to stdout: it is the output the user asked for with `-h`, not a
// diagnostic. Parse failures go to stderr via `error_out` with exit code 255,
// keeping runtime failures (exit 1) distinguishable in scripts.

use crate::cli::constants::display_level;
use crate::displayout;

/// Exit code for a malformed command line.
pub const EXIT_BAD_USAGE: i32 = 255;

/// Print `msg` to stderr (at display level 1) then exit with [`EXIT_BAD_USAGE`].
pub fn error_out(msg: &str) -> ! {
    if display_level() >= 1 {
        eprintln!("{}", msg);
    }
    std::process::exit(EXIT_BAD_USAGE);
}

/// Print brief usage to stdout.
pub fn print_usage(program: &str) {
    displayout!(
        "Usage: {} [-hD] [-i in_file] [-o out_file]\n\
         \x20 -h, --help     display this message\n\
         \x20 -D, --decode   decode the ASCII form back to Unicode\n\
         \x20 -i, --input    input file (default: \"-\" for stdin)\n\
         \x20 -o, --output   output file (default: \"-\" for stdout)\n",
        program
    );
}
