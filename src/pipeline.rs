//! Pipeline orchestration.
//!
//! [`run`] sequences the stages for one invocation: resolve and read the
//! source to completion, transform, resolve the sink, emit, finalize. Each
//! stage failure short-circuits the rest through `?`, so after any error no
//! further read or write occurs; the caller turns the error into a single
//! diagnostic and exit code.
//!
//! Handles are opened at the last possible moment. In particular the output
//! file is not created until the transform has already succeeded, so a
//! transform failure cannot leave a truncated file behind.

use anyhow::Context;

use crate::cli::args::ParsedArgs;
use crate::cli::constants::STDIO_MARK;
use crate::io::{open_dst_file, open_src_file, read_all_bytes, write_buffer};
use crate::transform::transform;

/// Runs the full transcode described by `args`.
pub fn run(args: &ParsedArgs) -> anyhow::Result<()> {
    let mut src = open_src_file(&args.input)
        .with_context(|| format!("cannot open input '{}'", describe(&args.input)))?;
    let buffer = read_all_bytes(src.as_mut())
        .with_context(|| format!("read from '{}' failed", describe(&args.input)))?;

    let transformed = transform(buffer, args.direction)?;

    let mut dst = open_dst_file(&args.output)
        .with_context(|| format!("cannot open output '{}'", describe(&args.output)))?;
    write_buffer(&mut dst, &transformed)
        .with_context(|| format!("write to '{}' failed", describe(&args.output)))?;
    dst.finish()
        .with_context(|| format!("finalizing '{}' failed", describe(&args.output)))?;

    Ok(())
}

fn describe(descriptor: &str) -> &str {
    if descriptor == STDIO_MARK {
        "<stdio>"
    } else {
        descriptor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Direction;

    fn args(direction: Direction, input: &str, output: &str) -> ParsedArgs {
        ParsedArgs {
            direction,
            input: input.to_owned(),
            output: output.to_owned(),
            exit_early: false,
        }
    }

    #[test]
    fn file_to_file_encode() {
        let dir = tempfile::tempdir().unwrap();
        let inp = dir.path().join("in.txt");
        let out = dir.path().join("out.txt");
        std::fs::write(&inp, "bücher").unwrap();

        run(&args(
            Direction::Encode,
            inp.to_str().unwrap(),
            out.to_str().unwrap(),
        ))
        .unwrap();

        assert_eq!(std::fs::read(&out).unwrap(), b"xn--bcher-kva");
    }

    #[test]
    fn file_to_file_decode() {
        let dir = tempfile::tempdir().unwrap();
        let inp = dir.path().join("in.txt");
        let out = dir.path().join("out.txt");
        std::fs::write(&inp, "xn--bcher-kva").unwrap();

        run(&args(
            Direction::Decode,
            inp.to_str().unwrap(),
            out.to_str().unwrap(),
        ))
        .unwrap();

        assert_eq!(std::fs::read(&out).unwrap(), "bücher".as_bytes());
    }

    #[test]
    fn missing_input_fails_without_creating_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("never.txt");

        let err = run(&args(
            Direction::Encode,
            "/nonexistent/input/file",
            out.to_str().unwrap(),
        ))
        .unwrap_err();

        assert!(err.to_string().contains("/nonexistent/input/file"), "{}", err);
        assert!(!out.exists(), "failed run must not create the output file");
    }

    #[test]
    fn transform_failure_leaves_existing_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let inp = dir.path().join("bad.bin");
        let out = dir.path().join("keep.txt");
        std::fs::write(&inp, [0xFFu8, 0xFE]).unwrap();
        std::fs::write(&out, b"precious").unwrap();

        let result = run(&args(
            Direction::Encode,
            inp.to_str().unwrap(),
            out.to_str().unwrap(),
        ));

        assert!(result.is_err());
        assert_eq!(std::fs::read(&out).unwrap(), b"precious");
    }
}
