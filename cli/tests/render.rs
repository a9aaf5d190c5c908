use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .to_string()
}

fn kairo() -> Command {
    Command::cargo_bin("kairo").unwrap()
}

#[test]
fn test_render_object() {
    kairo()
        .args(["render", &fixture("route_result.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""weight_name": "routability""#))
        .stdout(predicate::str::contains(r#""code": "Ok""#));
}

#[test]
fn test_render_json_buffer_is_byte_identical() {
    let path = fixture("route_result.json");
    let expected = fs::read_to_string(&path).unwrap();
    kairo()
        .args(["render", &path, "--format", "json_buffer"])
        .assert()
        .success()
        .stdout(expected.trim_end().to_string());
}

#[test]
fn test_render_response_strips_code() {
    kairo()
        .args(["render", &fixture("route_result.json"), "--response", "--format", "json_buffer"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"{"routes":"#))
        .stdout(predicate::str::contains(r#""code""#).not());
}

#[test]
fn test_render_response_error_code() {
    kairo()
        .args(["render", &fixture("error_result.json"), "--response"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NoRoute"));
}

#[test]
fn test_render_requires_object() {
    kairo()
        .args(["render"])
        .write_stdin("[1, 2, 3]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("result tree must be an object, got array"));
}
