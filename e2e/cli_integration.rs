// e2e/cli_integration.rs: CLI integration tests
//
// Tests the `lzss` binary as a black-box CLI tool using std::process::Command.
// Covers argument parsing, format selection, stdin/stdout piping, exit codes,
// and the abort path.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Locate the `lzss` binary produced by Cargo.
fn lzss_bin() -> PathBuf {
    // CARGO_BIN_EXE_lzss is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_lzss") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("lzss");
    p
}

// ── 1. --version ──────────────────────────────────────────────────────────────

#[test]
fn test_cli_version() {
    let output = Command::new(lzss_bin())
        .arg("--version")
        .output()
        .expect("failed to run lzss --version");

    assert!(output.status.success(), "status: {}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("LZSS 1.0.0"),
        "--version stdout should contain 'LZSS 1.0.0'; got: {stdout}"
    );
}

// ── 2. --help ─────────────────────────────────────────────────────────────────

#[test]
fn test_cli_help() {
    let output = Command::new(lzss_bin())
        .arg("--help")
        .output()
        .expect("failed to run lzss --help");

    assert!(output.status.success(), "status: {}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.to_lowercase().contains("usage"),
        "--help output should contain 'usage'; got: {stdout}"
    );
}

// ── 3. ASCII file-to-file compression ─────────────────────────────────────────

#[test]
fn test_cli_ascii_file_to_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.lzss");
    fs::write(&input, "aaaaaaaaaa").unwrap();

    let status = Command::new(lzss_bin())
        .args([
            "-a",
            "-w",
            "10",
            "-m",
            "4",
            "-M",
            "1024",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .status()
        .expect("failed to run lzss");
    assert!(status.success(), "compress step should exit 0");

    let encoded = fs::read(&output).unwrap();
    assert_eq!(encoded, b"0a 1(0,9)\n\0");
}

// ── 4. Binary format: empty input ─────────────────────────────────────────────

#[test]
fn test_cli_binary_empty_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty");
    let output = dir.path().join("empty.lzss");
    fs::write(&input, "").unwrap();

    let status = Command::new(lzss_bin())
        .args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .status()
        .expect("failed to run lzss");
    assert!(status.success());

    assert_eq!(fs::read(&output).unwrap(), [0x80]);
}

// ── 5. stdin → stdout piping ──────────────────────────────────────────────────

#[test]
fn test_cli_stdin_stdout_pipe() {
    let mut child = Command::new(lzss_bin())
        .arg("-a")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn lzss");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"abcabcabcabcabcabc")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    // default min match length is 8
    assert_eq!(output.stdout, b"0a 0b 0c 1(2,15)\n\0");
}

// ── 6. Bad usage exits 1 ──────────────────────────────────────────────────────

#[test]
fn test_cli_bad_usage() {
    for args in [&["--bogus"][..], &["-w", "1"][..], &["-m", "9", "-M", "8"][..]] {
        let output = Command::new(lzss_bin())
            .args(args)
            .output()
            .expect("failed to run lzss");
        assert_eq!(output.status.code(), Some(1), "args {args:?} should exit 1");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("bad usage"),
            "args {args:?}: stderr should mention bad usage; got: {stderr}"
        );
    }
}

// ── 7. Missing input file aborts ──────────────────────────────────────────────

#[test]
fn test_cli_missing_input_aborts() {
    let output = Command::new(lzss_bin())
        .args(["-i", "/nonexistent/lzss-input", "-o", "/dev/null"])
        .output()
        .expect("failed to run lzss");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("[ABORTED]"),
        "stderr should carry the abort banner; got: {stderr}"
    );
}

// ── 8. Summary line ───────────────────────────────────────────────────────────

#[test]
fn test_cli_reports_compressed_totals() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "aaaaaaaaaa".repeat(100)).unwrap();

    let output = Command::new(lzss_bin())
        .args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            dir.path().join("out.lzss").to_str().unwrap(),
        ])
        .output()
        .expect("failed to run lzss");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Compressed 1000 bytes into"),
        "stderr should carry the summary; got: {stderr}"
    );
}
