// e2e/cli_integration.rs — CLI integration tests
//
// Tests the `punyconv` binary as a black-box CLI tool using
// std::process::Command. Covers argument parsing, encode/decode dispatch,
// exit codes, stdin/stdout plumbing, and file I/O.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Locate the `punyconv` binary produced by Cargo.
fn punyconv_bin() -> PathBuf {
    // CARGO_BIN_EXE_punyconv is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_punyconv") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("punyconv");
    p
}

/// Run the binary with `args`, feeding `stdin_bytes`, and capture everything.
fn run_with_stdin(args: &[&str], stdin_bytes: &[u8]) -> std::process::Output {
    let mut child = Command::new(punyconv_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn punyconv");
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(stdin_bytes)
        .unwrap();
    child.wait_with_output().expect("failed to wait on punyconv")
}

// ── 1. Encode via stdin/stdout (default direction) ───────────────────────────

#[test]
fn test_cli_encode_stdin_stdout() {
    let output = run_with_stdin(&[], "bücher".as_bytes());
    assert!(
        output.status.success(),
        "default encode should exit 0; stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(output.stdout, b"xn--bcher-kva");
    assert!(
        output.stderr.is_empty(),
        "successful run must not print diagnostics"
    );
}

// ── 2. Decode with -D ─────────────────────────────────────────────────────────

#[test]
fn test_cli_decode_flag() {
    let output = run_with_stdin(&["-D"], b"xn--bcher-kva");
    assert!(output.status.success(), "-D decode should exit 0");
    assert_eq!(output.stdout, "bücher".as_bytes());
}

#[test]
fn test_cli_decode_long_flag() {
    let output = run_with_stdin(&["--decode"], b"xn--bcher-kva");
    assert!(output.status.success());
    assert_eq!(output.stdout, "bücher".as_bytes());
}

// ── 3. --help ─────────────────────────────────────────────────────────────────

#[test]
fn test_cli_help_exits_zero_without_reading_stdin() {
    // stdin is left unpiped; -h must exit 0 without touching it.
    let output = Command::new(punyconv_bin())
        .arg("-h")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run punyconv -h");

    assert!(
        output.status.success(),
        "-h should exit 0; status: {}",
        output.status
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.to_lowercase().contains("usage"),
        "-h should print usage on stdout; got: {stdout}"
    );
}

#[test]
fn test_cli_help_question_mark_alias() {
    let output = Command::new(punyconv_bin())
        .arg("-?")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run punyconv -?");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

// ── 4. Nonexistent input → exit 1 ────────────────────────────────────────────

#[test]
fn test_cli_nonexistent_input() {
    let output = Command::new(punyconv_bin())
        .args(["-i", "/nonexistent_path_punyconv_test"])
        .stdin(Stdio::null())
        .output()
        .expect("failed to run punyconv with nonexistent input");

    assert_eq!(
        output.status.code(),
        Some(1),
        "runtime I/O failure should exit 1"
    );
    assert!(
        !output.stderr.is_empty(),
        "a diagnostic must appear on stderr"
    );
    assert!(
        output.stdout.is_empty(),
        "no output may be written after a failure"
    );
}

// ── 5. Unknown flag → exit 255 ───────────────────────────────────────────────

#[test]
fn test_cli_unknown_flag() {
    let output = Command::new(punyconv_bin())
        .arg("--bogus")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run punyconv --bogus");

    assert_eq!(
        output.status.code(),
        Some(255),
        "usage errors should exit 255"
    );
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_cli_value_flag_without_value() {
    let output = Command::new(punyconv_bin())
        .arg("-i")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run punyconv -i");
    assert_eq!(output.status.code(), Some(255));
}

// ── 6. File-to-file round trip ───────────────────────────────────────────────

#[test]
fn test_cli_file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    let encoded = dir.path().join("encoded.txt");
    let roundtrip = dir.path().join("roundtrip.txt");
    fs::write(&input, "münchen.example").unwrap();

    // Encode
    let status = Command::new(punyconv_bin())
        .args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            encoded.to_str().unwrap(),
        ])
        .stdin(Stdio::null())
        .status()
        .expect("encode step failed to run");
    assert!(status.success(), "encode step should exit 0");
    assert_eq!(fs::read(&encoded).unwrap(), b"xn--mnchen-3ya.example");

    // Decode
    let status = Command::new(punyconv_bin())
        .args([
            "-D",
            "-i",
            encoded.to_str().unwrap(),
            "-o",
            roundtrip.to_str().unwrap(),
        ])
        .stdin(Stdio::null())
        .status()
        .expect("decode step failed to run");
    assert!(status.success(), "decode step should exit 0");
    assert_eq!(fs::read(&roundtrip).unwrap(), "münchen.example".as_bytes());
}

// ── 7. Output file is truncated, not appended ────────────────────────────────

#[test]
fn test_cli_output_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.txt");
    fs::write(&out, "old content that is much longer than the new one").unwrap();

    let mut child = Command::new(punyconv_bin())
        .args(["-o", out.to_str().unwrap()])
        .stdin(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.as_mut().unwrap().write_all(b"abc").unwrap();
    let status = child.wait().unwrap();

    assert!(status.success());
    assert_eq!(fs::read(&out).unwrap(), b"abc");
}

// ── 8. Usage error after -o must not touch the named file ────────────────────

#[test]
fn test_cli_late_usage_error_leaves_output_alone() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("precious.txt");
    fs::write(&out, b"precious").unwrap();

    let output = Command::new(punyconv_bin())
        .args(["-o", out.to_str().unwrap(), "--bogus"])
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(255));
    assert_eq!(
        fs::read(&out).unwrap(),
        b"precious",
        "a parse failure must not truncate the output file"
    );
}

// ── 9. Large stdin payloads survive the pipe ─────────────────────────────────

#[test]
fn test_cli_large_ascii_passthrough() {
    // A long dotted ASCII name exercises the aggregation and emission paths
    // with more data than a single pipe buffer holds.
    let label = "a".repeat(63);
    let big: String = std::iter::repeat(label.as_str())
        .take(4096)
        .collect::<Vec<_>>()
        .join(".");

    let output = run_with_stdin(&[], big.as_bytes());
    assert!(output.status.success());
    assert_eq!(output.stdout, big.as_bytes());
}
