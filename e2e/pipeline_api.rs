// e2e/pipeline_api.rs — library-level pipeline tests
//
// Drives the public lib surface (args parsing + pipeline::run) against real
// files in temp directories, without spawning the binary.

use punyconv::cli::args::parse_args_from;
use punyconv::io::{open_dst_file, open_src_file, read_all_bytes, write_buffer};
use punyconv::pipeline;
use tempfile::TempDir;

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

// ── Parsed args drive the pipeline end to end ────────────────────────────────

#[test]
fn test_parse_then_run_encode() {
    let dir = TempDir::new().unwrap();
    let inp = dir.path().join("in.txt");
    let out = dir.path().join("out.txt");
    std::fs::write(&inp, "köln").unwrap();

    let args = parse_args_from(
        "punyconv",
        &argv(&[
            "-i",
            inp.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ]),
    )
    .unwrap();
    pipeline::run(&args).unwrap();

    assert_eq!(std::fs::read(&out).unwrap(), b"xn--kln-sna");
}

#[test]
fn test_parse_then_run_decode() {
    let dir = TempDir::new().unwrap();
    let inp = dir.path().join("in.txt");
    let out = dir.path().join("out.txt");
    std::fs::write(&inp, "xn--kln-sna").unwrap();

    let args = parse_args_from(
        "punyconv",
        &argv(&[
            "--decode",
            "--input",
            inp.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ]),
    )
    .unwrap();
    pipeline::run(&args).unwrap();

    assert_eq!(std::fs::read(&out).unwrap(), "köln".as_bytes());
}

// ── Aggregation + emission through real files ────────────────────────────────

#[test]
fn test_read_write_preserves_bytes_exactly() {
    let dir = TempDir::new().unwrap();
    let src_path = dir.path().join("src.bin");
    let dst_path = dir.path().join("dst.bin");
    let payload: Vec<u8> = (0..300_000u32).map(|i| (i % 256) as u8).collect();
    std::fs::write(&src_path, &payload).unwrap();

    let mut src = open_src_file(src_path.to_str().unwrap()).unwrap();
    let buffer = read_all_bytes(src.as_mut()).unwrap();
    assert_eq!(buffer, payload);

    let mut dst = open_dst_file(dst_path.to_str().unwrap()).unwrap();
    write_buffer(&mut dst, &buffer).unwrap();
    dst.finish().unwrap();

    assert_eq!(std::fs::read(&dst_path).unwrap(), payload);
}

// ── Failure surfaces with the failing path in the message ────────────────────

#[test]
fn test_run_error_names_the_input_path() {
    let args = parse_args_from("punyconv", &argv(&["-i", "/no/such/punyconv/input"])).unwrap();
    let err = pipeline::run(&args).unwrap_err();
    let rendered = format!("{:#}", err);
    assert!(
        rendered.contains("/no/such/punyconv/input"),
        "diagnostic should name the path; got: {rendered}"
    );
}
