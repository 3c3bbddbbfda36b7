use assert_cmd::Command;
use predicates::prelude::*;

const SUBSCRIBERS: &str = r#"{
    "users": {
        "subscribers": {
            "sumit": {"id": "12345", "name": "Sumit"},
            "tony": {"id": "780643"},
            "steve": {"id": "532678"}
        }
    }
}"#;

fn dotpath() -> Command {
    Command::cargo_bin("dotpath").unwrap()
}

#[test]
fn resolve_wildcard_from_stdin() {
    dotpath()
        .args(["resolve", "users.*.*.id"])
        .write_stdin(SUBSCRIBERS)
        .assert()
        .success()
        .stdout(
            "users.subscribers.sumit.id\nusers.subscribers.tony.id\nusers.subscribers.steve.id\n",
        );
}

#[test]
fn resolve_without_pattern_lists_leaves() {
    dotpath()
        .args(["resolve", "--json"])
        .write_stdin(SUBSCRIBERS)
        .assert()
        .success()
        .stdout(predicate::str::contains("users.subscribers.sumit.name"));
}

#[test]
fn resolve_too_shallow_prints_nothing() {
    dotpath()
        .args(["resolve", "users.*.id"])
        .write_stdin(SUBSCRIBERS)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn resolve_values() {
    dotpath()
        .args(["resolve", "users.subscribers.*.id", "--values"])
        .write_stdin(SUBSCRIBERS)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""users.subscribers.tony.id":"780643""#));
}

#[test]
fn resolve_trailing_dot_fails() {
    dotpath()
        .args(["resolve", "users."])
        .write_stdin(SUBSCRIBERS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("can not end with"));
}

#[test]
fn resolve_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.json");
    std::fs::write(&path, SUBSCRIBERS).unwrap();

    dotpath()
        .args(["resolve", "*.*.sumit", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout("users.subscribers.sumit\n");
}

#[test]
fn flatten_prints_json_map() {
    dotpath()
        .args(["flatten"])
        .write_stdin(r#"{"a": {"b": [1, 2]}}"#)
        .assert()
        .success()
        .stdout("{\"a.b.0\":1,\"a.b.1\":2}\n");
}

#[test]
fn exists_reports_presence() {
    dotpath()
        .args(["exists", "users.subscribers.tony"])
        .write_stdin(SUBSCRIBERS)
        .assert()
        .success()
        .stdout("true\n");

    dotpath()
        .args(["exists", "users.b.c", "-i", "-"])
        .write_stdin(SUBSCRIBERS)
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn invalid_json_input_fails() {
    dotpath()
        .args(["flatten"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse stdin"));
}

#[test]
fn resolve_values_under_empty_key() {
    dotpath()
        .args(["resolve", "a.*", "--values"])
        .write_stdin(r#"{"a": {"": 1, "b": 2}}"#)
        .assert()
        .success()
        .stdout("{\"a\":1,\"a.b\":2}\n");
}
