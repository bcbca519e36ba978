use assert_cmd::Command;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_json(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn decodes_valid_document_to_stdout() {
    let file = write_json(r#"{"a":1,"b":[true,null]}"#);
    Command::cargo_bin("jsonc")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("\"a\""));
}

#[test]
fn reports_structural_error_on_invalid_document() {
    let file = write_json(r#"{"a":1,}"#);
    Command::cargo_bin("jsonc")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(contains("object error"));
}

#[test]
fn reports_missing_file_as_error() {
    Command::cargo_bin("jsonc")
        .unwrap()
        .arg("/nonexistent/path/does-not-exist.json")
        .assert()
        .failure();
}
