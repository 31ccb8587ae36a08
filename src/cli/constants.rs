// cli/constants.rs — program identity, display globals, and stdio sentinel.

use std::sync::atomic::{AtomicU32, Ordering};

// ── String / identity constants ───────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "punyconv";

/// Command-line value selecting standard input (as `--input`) or standard
/// output (as `--output`).
pub const STDIO_MARK: &str = "-";

// ── Display level global ──────────────────────────────────────────────────────
//
// Crate-level atomic so the I/O layer and the CLI share one notification
// level. 0 = silent; 1 = errors only; 2 = normal; 3 = warnings; 4 = verbose.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// Print to stdout (primary output channel for requested text such as usage).
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
