use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn jpq() -> Command {
    Command::cargo_bin("jpq").unwrap()
}

fn write_doc(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(format!("{name}.json")), body).unwrap();
}

#[test]
fn resolves_an_object_path() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "sample", r#"{"a": {"b": {"c": 42}}}"#);

    jpq()
        .arg("file=sample&a&b&c")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("42"));
}

#[test]
fn resolves_an_array_index_and_filter() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(
        dir.path(),
        "users",
        r#"{"users": [{"id": "u1", "name": "Ada"}, {"id": "u2", "name": "Grace"}]}"#,
    );

    jpq()
        .arg("file=users&users&1&name")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--raw")
        .assert()
        .success()
        .stdout("Grace\n");

    jpq()
        .arg("file=users&users&id=u1&name")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--raw")
        .assert()
        .success()
        .stdout("Ada\n");
}

#[test]
fn leading_question_mark_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "sample", r#"{"a": 1}"#);

    jpq()
        .arg("?file=sample&a")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--compact")
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn missing_selector_fails_before_touching_disk() {
    // Points at a directory that does not exist; the selector check must
    // fire first.
    jpq()
        .arg("a&b&c")
        .arg("--data-dir")
        .arg("/nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing \"file\" parameter"));
}

#[test]
fn bare_file_flag_requires_a_value() {
    jpq()
        .arg("file&a")
        .arg("--data-dir")
        .arg("/nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a value"));
}

#[test]
fn missing_document_reports_the_attempted_path() {
    let dir = tempfile::tempdir().unwrap();

    jpq()
        .arg("file=absent&a")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn unresolved_path_exits_one_with_a_trace() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "sample", r#"{"items": [{"id": "x"}]}"#);

    jpq()
        .arg("file=sample&items&id=z")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("matched nothing"))
        .stderr(predicate::str::contains("path did not resolve"));
}

#[test]
fn trace_is_suppressed_on_success_unless_asked() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "sample", r#"{"a": 1}"#);

    jpq()
        .arg("file=sample&a")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("end of query").not());

    jpq()
        .arg("file=sample&a")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--trace")
        .assert()
        .success()
        .stdout(predicate::str::contains("root loaded"))
        .stdout(predicate::str::contains("end of query"));
}

#[test]
fn trace_json_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "sample", r#"{"a": 1}"#);

    let output = jpq()
        .arg("file=sample&b")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--trace-json")
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let entries = parsed.as_array().unwrap();
    assert!(!entries.is_empty());
    assert_eq!(entries[0]["step"], 0);
    assert_eq!(entries.last().unwrap()["severity"], "warn");
}

#[test]
fn expanded_trace_prints_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "sample", r#"{"a": {"b": 2}}"#);

    jpq()
        .arg("file=sample&a&zzz")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--expand")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("undefined"))
        .stderr(predicate::str::contains("\"b\""));
}

#[test]
fn no_color_strips_ansi_codes() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "sample", r#"{"a": 1}"#);

    jpq()
        .arg("file=sample&a")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--color")
        .arg("always")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}
