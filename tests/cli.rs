use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn release() -> Command {
    Command::cargo_bin("release").unwrap()
}

fn write_project(root: &Path) {
    fs::write(
        root.join("jcanvas.js"),
        "/**\n * @license jCanvas v24.01.15\n * Copyright 2023 Caleb Evans\n */\n",
    )
    .unwrap();
    fs::write(root.join("package.json"), "{ \"version\": \"24.01.15\" }\n").unwrap();
    fs::write(root.join("README.md"), "jCanvas\nCopyright 2023\n").unwrap();
    fs::write(root.join("LICENSE.txt"), "Copyright (c) 2023 Caleb Evans\n").unwrap();
}

#[test]
fn stamp_prints_version_and_year() {
    release()
        .args(["--date", "2024-03-07", "stamp"])
        .assert()
        .success()
        .stdout("VERSION=24.03.07\nYEAR=2024\n");
}

#[test]
fn stamp_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out").join("version.env");

    release()
        .args(["--date", "2024-03-07", "stamp", "-o"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(out).unwrap(), "VERSION=24.03.07\nYEAR=2024\n");
}

#[test]
fn bump_rewrites_release_files() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path());

    release()
        .arg("--root")
        .arg(temp_dir.path())
        .args(["--date", "2024-03-07", "bump"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Building...").and(predicate::str::contains("Done.")));

    let source = fs::read_to_string(temp_dir.path().join("jcanvas.js")).unwrap();
    assert!(source.contains("jCanvas v24.03.07"));
    assert!(source.contains("Copyright 2024 Caleb Evans"));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("LICENSE.txt")).unwrap(),
        "Copyright (c) 2024 Caleb Evans\n"
    );
    assert!(!temp_dir.path().join("jcanvas.min.js").exists());
}

#[test]
fn dry_run_leaves_files_alone() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path());

    release()
        .arg("--root")
        .arg(temp_dir.path())
        .args(["--date", "2024-03-07", "build", "--dry-run"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("package.json")).unwrap(),
        "{ \"version\": \"24.01.15\" }\n"
    );
}

#[test]
fn missing_file_fails_with_nonzero_exit() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path());
    fs::remove_file(temp_dir.path().join("README.md")).unwrap();

    release()
        .arg("--root")
        .arg(temp_dir.path())
        .arg("bump")
        .assert()
        .failure()
        .stderr(predicate::str::contains("README.md"));
}

#[test]
fn missing_root_fails_validation() {
    release()
        .args(["--root", "/definitely/not/a/project/root", "stamp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project root not found"));
}

#[cfg(unix)]
#[test]
fn build_runs_compressor_on_source_and_plugins() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path());
    let plugins = temp_dir.path().join("plugins");
    fs::create_dir(&plugins).unwrap();
    fs::write(plugins.join("jcanvas-hearts.js"), "// hearts\n").unwrap();

    release()
        .arg("--root")
        .arg(temp_dir.path())
        .args([
            "--date",
            "2024-03-07",
            "build",
            "--compressor",
            "sh",
            "--compressor-arg",
            "-c",
            "--compressor-arg",
            r#"cp "$2" "$4""#,
            "--compressor-arg",
            "stand-in",
            "--extra-sources",
            "plugins/*.js",
        ])
        .assert()
        .success();

    let minified = fs::read_to_string(temp_dir.path().join("jcanvas.min.js")).unwrap();
    assert!(minified.contains("jCanvas v24.03.07"));
    assert!(plugins.join("jcanvas-hearts.min.js").exists());
}

#[cfg(unix)]
#[test]
fn failing_compressor_fails_the_build() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path());

    release()
        .arg("--root")
        .arg(temp_dir.path())
        .args([
            "compress",
            "--compressor",
            "sh",
            "--compressor-arg",
            "-c",
            "--compressor-arg",
            "exit 1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to compress sources"));
}
