use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

#[test]
fn cli_renders_yaml_to_dot() {
    let root = repo_root();
    let fixture = root.join("fixtures").join("montclair.yaml");
    assert!(fixture.exists(), "fixture missing: {}", fixture.display());

    let exe = assert_cmd::cargo_bin!("stemma-cli");
    let assert = Command::new(exe)
        .current_dir(&root)
        .args(["render", fixture.to_string_lossy().as_ref()])
        .assert()
        .success();

    let out = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 output");
    assert!(out.starts_with("digraph G {"));
    assert!(out.contains("union_0 ["));
    assert!(out.contains("subgraph cluster_cadet {"));
    assert!(out.contains("# Family [HenriMontclair, LouiseBertrand] -> [PaulMontclair, Anne-Marie]"));
}

#[test]
fn cli_writes_dot_with_out_flag() {
    let root = repo_root();
    let fixture = root.join("fixtures").join("montclair.yaml");

    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("montclair.dot");

    let exe = assert_cmd::cargo_bin!("stemma-cli");
    Command::new(exe)
        .current_dir(&root)
        .args([
            "render",
            "--out",
            out.to_string_lossy().as_ref(),
            fixture.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&out).expect("read dot");
    assert!(text.starts_with("digraph G {"));
    assert!(text.ends_with("}\n"));
}

#[test]
fn cli_parse_prints_the_normalized_model() {
    let root = repo_root();
    let fixture = root.join("fixtures").join("montclair.yaml");

    let exe = assert_cmd::cargo_bin!("stemma-cli");
    let assert = Command::new(exe)
        .current_dir(&root)
        .args(["parse", fixture.to_string_lossy().as_ref()])
        .assert()
        .success();

    let out = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 output");
    let model: serde_json::Value = serde_json::from_str(&out).expect("valid JSON model");
    assert!(model["people"]["HenriMontclair"]["born"].is_string());
    assert_eq!(model["people"]["LouiseBertrand"]["born"], "1880");
}

#[test]
fn cli_reads_json_from_stdin() {
    use std::io::Write as _;
    use std::process::Stdio;

    let exe = assert_cmd::cargo_bin!("stemma-cli");
    let mut child = Command::new(exe)
        .args(["render", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn stemma-cli");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(br#"{ "families": [ { "parents": ["A"], "children": ["B", "C"] } ] }"#)
        .expect("write stdin");

    let output = child.wait_with_output().expect("wait for stemma-cli");
    assert!(output.status.success());

    let out = String::from_utf8(output.stdout).expect("utf-8 output");
    assert!(out.contains("{A} -> union_0 ["));
    assert!(out.contains("\"B\" -> \"C\" ["));
}

#[test]
fn cli_rejects_malformed_input() {
    let exe = assert_cmd::cargo_bin!("stemma-cli");
    let assert = Command::new(exe)
        .args(["render", "no-such-file.yaml"])
        .assert()
        .failure();

    let err = String::from_utf8(assert.get_output().stderr.clone()).expect("utf-8 stderr");
    assert!(err.contains("I/O error"));
}
