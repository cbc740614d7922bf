//! Runs the `fts-tokenize` binary end to end.

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

fn fts_tokenize() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fts-tokenize"));
    cmd.env_remove("FTS_TOKENIZER");
    cmd
}

#[test]
fn test_tokenize_file_as_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"<h1>Unites</h1> <p>repentance</p>").unwrap();

    let output = fts_tokenize()
        .args(["tokenize", "-t", "HTMLTokenizer", "-a", "stemmer=english", "-f", "json"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let tokens: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0]["text"], "unit");
    assert_eq!(tokens[0]["start_offset"], 4);
    assert_eq!(tokens[1]["text"], "repent");
    assert_eq!(tokens[1]["position"], 1);
}

#[test]
fn test_tokenize_stdin() {
    let mut child = fts_tokenize()
        .args(["tokenize", "-t", "character"])
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"abc 123").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 2);
}

#[test]
fn test_unknown_tokenizer_exits_nonzero() {
    let output = fts_tokenize()
        .args(["tokenize", "--text", "x", "-t", "icu"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("icu"));
}

#[test]
fn test_list_pretty_json() {
    let output = fts_tokenize().args(["list", "-f", "json", "--pretty"]).output().unwrap();
    assert!(output.status.success());
    let list: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 3);
    assert_eq!(list[2]["name"], "unicodesn");
    assert_eq!(list[2]["kind"], "unicode_stemming");
}
