use assert_cmd::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path, process::Command};

#[derive(Deserialize)]
#[allow(dead_code)]
struct ReportOut {
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

#[derive(Deserialize)]
#[allow(dead_code)]
struct FileOut {
    path: String,
    report: ReportOut,
}

#[derive(Deserialize)]
#[allow(dead_code)]
struct ModOut {
    schema_version: u32,
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
    checked: usize,
    files: Vec<FileOut>,
}

fn bin_cmd() -> Command {
    Command::cargo_bin("rimcheck-cli").expect("rimcheck-cli built")
}

fn write(root: &Path, rel: &str, content: &str) {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, content).unwrap();
}

const GOOD_ABOUT: &str = "<ModMetaData><name>M</name><author>A</author>\
    <packageId>a.m</packageId>\
    <supportedVersions><li>1.5</li></supportedVersions></ModMetaData>";

#[test]
fn check_mod_accepts_complete_layout() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write(tmp.path(), "About/About.xml", GOOD_ABOUT);
    write(
        tmp.path(),
        "Defs/Things.xml",
        "<Defs><ThingDef><defName>X</defName><label>x</label></ThingDef></Defs>",
    );

    let mut cmd = bin_cmd();
    cmd.args(["--quiet", "check-mod", "--root"])
        .arg(tmp.path())
        .args(["--format", "json"]);
    let assert = cmd.assert().success();
    let out = String::from_utf8_lossy(assert.get_output().stdout.as_ref()).to_string();
    let parsed: ModOut = serde_json::from_str(&out).expect("valid json");
    assert!(parsed.valid);
    assert_eq!(parsed.checked, 2);
}

#[test]
fn check_mod_flags_missing_about() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write(
        tmp.path(),
        "Defs/Things.xml",
        "<Defs><ThingDef><defName>X</defName><label>x</label></ThingDef></Defs>",
    );

    let mut cmd = bin_cmd();
    cmd.args(["--quiet", "check-mod", "--root"])
        .arg(tmp.path())
        .args(["--format", "json"]);
    let assert = cmd.assert().success();
    let out = String::from_utf8_lossy(assert.get_output().stdout.as_ref()).to_string();
    let parsed: ModOut = serde_json::from_str(&out).expect("valid json");
    assert!(!parsed.valid);
    assert!(parsed
        .errors
        .contains(&"Missing required folder: About".to_string()));
    assert!(parsed.errors.contains(&"Missing About.xml".to_string()));
}

#[test]
fn check_mod_strict_fails_on_invalid_mod() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut cmd = bin_cmd();
    cmd.args(["--quiet", "check-mod", "--strict", "--root"])
        .arg(tmp.path())
        .args(["--format", "json"]);
    cmd.assert().failure();
}
