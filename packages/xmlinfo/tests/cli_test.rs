//! End-to-end tests for the xmlinfo binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn xmlinfo() -> Command {
    Command::cargo_bin("xmlinfo").unwrap()
}

#[test]
fn test_tree_prints_paths() {
    xmlinfo()
        .arg("tree")
        .arg(fixture("catalog.xml"))
        .args(["--skip-blank", "--ignore", "meta", "--name-attr", "id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<catalog>.<section> tools"))
        .stdout(predicate::str::contains(
            "<catalog>.<section>.<item>.<b>.text",
        ))
        .stdout(predicate::str::contains("<catalog>.<meta>").not());
}

#[test]
fn test_tree_yaml_output() {
    xmlinfo()
        .arg("tree")
        .arg(fixture("catalog.xml"))
        .args(["--skip-blank", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("root:"))
        .stdout(predicate::str::contains("price: '12'"));
}

#[test]
fn test_check_reports_unknown_tags() {
    xmlinfo()
        .arg("check")
        .arg(fixture("catalog.xml"))
        .args(["--skip-blank", "--only", "section", "--only", "item"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "No object provided to wrap element <meta> under <catalog>",
        ))
        .stdout(predicate::str::contains("<extra>"));
}

#[test]
fn test_check_clean_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean.xml");
    std::fs::write(&path, "<root><a>one</a><b/></root>").unwrap();

    xmlinfo()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"))
        .stdout(predicate::str::contains("4 nodes"));
}

#[test]
fn test_duplicate_names_fail() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.xml");
    std::fs::write(&path, r#"<root><a id="x"/><a id="x"/></root>"#).unwrap();

    xmlinfo()
        .arg("tree")
        .arg(&path)
        .args(["--name-attr", "id"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Two elements have used name 'x' in <root>",
        ));

    xmlinfo()
        .arg("tree")
        .arg(&path)
        .args(["--name-attr", "id", "--allow-duplicates"])
        .assert()
        .success();
}

#[test]
fn test_max_size_exceeded() {
    xmlinfo()
        .arg("tree")
        .arg(fixture("catalog.xml"))
        .args(["--max-size", "10"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exceeding the limit of 10 bytes"));
}

#[test]
fn test_tree_accepts_doctype() {
    xmlinfo()
        .arg("tree")
        .arg(fixture("doctype.xml"))
        .args(["--skip-blank", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: <catalog>.<section>.text"))
        .stdout(predicate::str::contains("text: Tool shop"));
}
