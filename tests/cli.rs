use assert_cmd::Command;

mod common;
use common::{read, SAMPLE_CORPUS};

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("yoloexport").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("yoloexport").unwrap();
    cmd.arg("-V");
    cmd.assert()
        .success()
        .stdout(predicates::str::starts_with("yoloexport "));
}

#[test]
fn export_writes_labels_and_index() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = temp.path().join("yolo");

    let mut cmd = Command::cargo_bin("yoloexport").unwrap();
    cmd.args(["export", SAMPLE_CORPUS, "--output"]).arg(&output);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("3 files, 3 label files, 3 lines, 3 classes"))
        .stdout(predicates::str::contains("Warnings (1):"));

    assert_eq!(
        read(output.join("valid/labels/street_002.txt")),
        "0 0.5 0.5 0.5 0.5"
    );
    assert!(read(output.join("dataset.yaml")).contains("names: ['bus', 'car', 'road']"));
}

#[test]
fn export_vertices_mode() {
    let temp = tempfile::tempdir().expect("create temp dir");

    let mut cmd = Command::cargo_bin("yoloexport").unwrap();
    cmd.args(["export", SAMPLE_CORPUS, "--polygon-mode", "vertices", "-o"])
        .arg(temp.path());
    cmd.assert().success();

    assert!(read(temp.path().join("train/labels/street_001.txt")).ends_with("2 0 1 0.5 0.5 1 1"));
}

#[test]
fn export_json_report() {
    let temp = tempfile::tempdir().expect("create temp dir");

    let mut cmd = Command::cargo_bin("yoloexport").unwrap();
    cmd.args(["export", SAMPLE_CORPUS, "--report", "json", "--output"])
        .arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"label_files\": 3"))
        .stdout(predicates::str::contains("\"unknown_annotation_type\""));
}

#[test]
fn export_nonexistent_input_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");

    let mut cmd = Command::cargo_bin("yoloexport").unwrap();
    cmd.args(["export", "nonexistent_file.json", "--output"])
        .arg(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Error:"));
}

#[test]
fn export_rejects_unknown_polygon_mode() {
    let temp = tempfile::tempdir().expect("create temp dir");

    let mut cmd = Command::cargo_bin("yoloexport").unwrap();
    cmd.args(["export", SAMPLE_CORPUS, "--polygon-mode", "mask", "--output"])
        .arg(temp.path());
    cmd.assert().failure();
}
