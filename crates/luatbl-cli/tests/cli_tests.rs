use assert_cmd::Command;
use predicates::prelude::*;

fn luatbl() -> Command {
    Command::cargo_bin("luatbl").unwrap()
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn decode_reads_stdin() {
    luatbl()
        .arg("decode")
        .write_stdin("{ name = 'Alice', scores = {95, 87, 92} }")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Alice\""))
        .stdout(predicate::str::contains("\"scores\": ["));
}

#[test]
fn decode_compact_is_one_line() {
    luatbl()
        .arg("decode")
        .arg("--compact")
        .write_stdin("{ a = 1, b = {2, 3} }")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"a":1,"b":[2,3]}"#));
}

#[test]
fn decode_reads_input_file() {
    luatbl()
        .arg("decode")
        .arg("--compact")
        .args(["-i", &fixture("sample.lua")])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"name":"Alice","scores":[95,87,92],"active":true}"#,
        ));
}

#[test]
fn decode_rejects_invalid_literal() {
    luatbl()
        .arg("decode")
        .write_stdin("{ a = }")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn decode_missing_file_fails() {
    luatbl()
        .arg("decode")
        .args(["-i", "/nonexistent/luatbl-cli-test.lua"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn encode_reads_json_stdin() {
    luatbl()
        .arg("encode")
        .write_stdin(r#"{"scores":[1,2,3]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("['scores'] = { 1, 2, 3 }"));
}

#[test]
fn encode_reads_input_file() {
    luatbl()
        .arg("encode")
        .args(["-i", &fixture("sample.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("['name'] = 'Alice'"))
        .stdout(predicate::str::contains("['scores'] = { 95, 87, 92 }"));
}

#[test]
fn encode_rejects_invalid_json() {
    luatbl()
        .arg("encode")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON"));
}

#[test]
fn fmt_canonicalizes_layout() {
    luatbl()
        .arg("fmt")
        .write_stdin("{1 , 2,3 ,}")
        .assert()
        .success()
        .stdout(predicate::str::contains("{ 1, 2, 3 }"));
}

#[test]
fn stdout_matches_file_output_exactly() {
    // No trailing newline on stdout; both paths emit the content verbatim.
    luatbl()
        .arg("fmt")
        .write_stdin("{a=1}")
        .assert()
        .success()
        .stdout(predicate::eq("{\n    ['a'] = 1\n}"));
}

#[test]
fn fmt_strips_comments() {
    luatbl()
        .arg("fmt")
        .write_stdin("{ 1, --[[ gone ]] 2 }")
        .assert()
        .success()
        .stdout(predicate::str::contains("{ 1, 2 }"))
        .stdout(predicate::str::contains("gone").not());
}

#[test]
fn fmt_writes_output_file() {
    let dir = std::env::temp_dir();
    let out = dir.join("luatbl-cli-fmt-out.lua");
    let _ = std::fs::remove_file(&out);

    luatbl()
        .arg("fmt")
        .args(["-o", out.to_str().unwrap()])
        .write_stdin("{a=1}")
        .assert()
        .success();

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, "{\n    ['a'] = 1\n}");
    let _ = std::fs::remove_file(&out);
}

#[test]
fn round_trip_through_both_commands() {
    let decoded = luatbl()
        .arg("decode")
        .arg("--compact")
        .write_stdin("{ a = 1, b = { 'x', 'y' } }")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    luatbl()
        .arg("encode")
        .write_stdin(decoded)
        .assert()
        .success()
        .stdout(predicate::str::contains("['a'] = 1"))
        .stdout(predicate::str::contains("['b'] = { 'x', 'y' }"));
}
