//! Command-line interface for the `punyconv` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, the shared `DISPLAY_LEVEL` atomic, and the stdio sentinel. |
//! | [`help`]      | Usage text printer and the `error_out` exit helper. |
//! | [`args`]      | `ParsedArgs` — the argument-parsing loop that consumes `argv` and produces the run configuration. |
//!
//! Typical call sequence: `parse_args` → dispatch to [`crate::pipeline::run`].

pub mod args;
pub mod constants;
pub mod help;
