//! Runs the `gzgreet` binary and checks what lands on stdout.

use std::io::Read;
use std::process::Command;

use flate2::read::GzDecoder;
use gzgreet::greeting::{GREETING, OUTPUT_CAPACITY};

fn run() -> Vec<u8> {
    let output = Command::new(env!("CARGO_BIN_EXE_gzgreet"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    output.stdout
}

fn gunzip(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    GzDecoder::new(data).read_to_end(&mut out).unwrap();
    out
}

#[test]
fn stdout_decompresses_to_greeting() {
    let stdout = run();
    assert!(!stdout.is_empty());
    assert!(stdout.len() <= OUTPUT_CAPACITY);
    assert_eq!(gunzip(&stdout), GREETING);
    assert_eq!(gunzip(&stdout).len(), 23);
}

#[test]
fn stdout_starts_with_gzip_deflate_header() {
    assert_eq!(&run()[..3], &[0x1f, 0x8b, 0x08]);
}

#[test]
fn repeated_runs_are_identical() {
    assert_eq!(run(), run());
}

#[test]
fn nothing_is_logged_by_default() {
    let output = Command::new(env!("CARGO_BIN_EXE_gzgreet"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.stderr.is_empty());
}

#[cfg(not(feature = "compression"))]
#[test]
fn fallback_replays_recording_exactly() {
    assert_eq!(run(), gzgreet::greeting::RECORDED_GREETING_GZ);
}
