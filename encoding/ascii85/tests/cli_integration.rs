#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::tempdir;

fn bin() -> String {
    env!("CARGO_BIN_EXE_ascii85").to_string()
}

#[test]
fn cli_encode_decode_roundtrip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let encoded = dir.path().join("input.a85");
    let output = dir.path().join("output.bin");

    let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    std::fs::write(&input, &data).unwrap();

    let st = Command::new(bin())
        .arg("encode")
        .arg(&input)
        .arg("-o")
        .arg(&encoded)
        .status()
        .unwrap();
    assert!(st.success());

    let text = std::fs::read(&encoded).unwrap();
    assert!(text.starts_with(b"<~"));
    assert!(text.ends_with(b"~>"));

    let st = Command::new(bin())
        .arg("decode")
        .arg(&encoded)
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();
    assert!(st.success());
    assert_eq!(std::fs::read(&output).unwrap(), data);
}

#[test]
fn cli_encode_stdin_to_stdout() {
    let mut child = Command::new(bin())
        .args(["encode", "--no-delimiters"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"Man X").unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, b"9jqo^=9");
}

#[test]
fn cli_decode_rejects_invalid_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.a85");
    std::fs::write(&input, b"<~9jzqo~>").unwrap();

    let out = Command::new(bin())
        .arg("decode")
        .arg(&input)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("position 4"));
}

#[test]
fn cli_missing_input_fails() {
    let dir = tempdir().unwrap();
    let out = Command::new(bin())
        .arg("encode")
        .arg(dir.path().join("missing.bin"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}
