use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn lastentry() -> Command {
    Command::cargo_bin("lastentry").unwrap()
}

fn write_source(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

const TOKENS: &str = "#[derive(Debug)]
pub enum TokenType {
    // keywords
    VAR,
    CONST,
    // comment
    ENUM,
}

impl TokenType {
    fn noop() {}
}
";

#[test]
fn test_prints_last_entry() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "tokens.rs", TOKENS);

    lastentry()
        .arg(&path)
        .assert()
        .success()
        .stdout("Last Enum Entry: ENUM,\n");
}

#[test]
fn test_default_path_is_relative() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/lexer")).unwrap();
    fs::write(
        dir.path().join("src/lexer/tokens.rs"),
        "enum TokenType {\n    LCURLY,\n    IDENT,\n    RCURLY,\n}\n",
    )
    .unwrap();

    lastentry()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("Last Enum Entry: IDENT,\n");
}

#[test]
fn test_embedded_sample() {
    lastentry()
        .arg("--embedded")
        .assert()
        .success()
        .stdout("Last Enum Entry: ENUM,\n");
}

#[test]
fn test_missing_file_fails_without_output() {
    lastentry()
        .arg("/nonexistent/tokens.rs")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("/nonexistent/tokens.rs"));
}

#[test]
fn test_pattern_not_found() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "other.rs", "pub enum Kind {\n    A,\n}\n");

    lastentry()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Last Enum Entry").not())
        .stderr(predicate::str::contains("enum TokenType"));
}

#[test]
fn test_empty_result() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "tokens.rs",
        "enum TokenType {\n    // only a comment\n    LCURLY,\n    RCURLY,\n}\n",
    );

    lastentry()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no entries left"));
}

#[test]
fn test_all_lists_entries() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "tokens.rs", TOKENS);

    lastentry()
        .args(["--all", &path])
        .assert()
        .success()
        .stdout("VAR,\nCONST,\nENUM,\nLast Enum Entry: ENUM,\n");
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "tokens.rs", TOKENS);

    let output = lastentry().args(["--json", &path]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["enum_name"], "TokenType");
    assert_eq!(value["last_entry"], "ENUM,");
    assert_eq!(value["entries"].as_array().unwrap().len(), 3);
}

#[test]
fn test_custom_enum_and_exclusions() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "ops.rs",
        "enum Op {\n    ADD,\n    SUB,\n    NOP,\n}\n",
    );

    lastentry()
        .args(["--enum-name", "Op", "--exclude", "NOP,", &path])
        .assert()
        .success()
        .stdout("Last Enum Entry: SUB,\n");
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "kw.rs",
        "enum Keyword {\n    IF,\n    # hidden\n    ELSE,\n}\n",
    );
    let config = write_source(
        &dir,
        "lastentry.toml",
        "enum_name = \"Keyword\"\ncomment_prefix = \"#\"\n",
    );

    lastentry()
        .args(["--config", &config, "--all", &path])
        .assert()
        .success()
        .stdout("IF,\nELSE,\nLast Enum Entry: ELSE,\n");
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "tokens.rs", TOKENS);
    let config = write_source(&dir, "bad.toml", "enum_name = [\n");

    lastentry()
        .args(["--config", &config, &path])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "tokens.rs", TOKENS);

    lastentry()
        .args(["--verbose", &path])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Last Enum Entry: ENUM,\n")
        .stderr(predicate::str::contains("kept 3 entries"));
}
